//! # Infrastructure Layer
//!
//! Concrete implementations of the core crate's external-data interfaces.
//! The only external dataset this service needs is the ISO 3166-1 country
//! table, exposed through [`country::IsoCountryProvider`] with a bounded
//! in-process cache in front of it.

pub mod country;

pub use country::IsoCountryProvider;
