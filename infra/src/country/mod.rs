//! Country metadata resolution over the ISO 3166-1 table

mod provider;

pub use provider::IsoCountryProvider;
