//! Domain services

pub mod auth;
pub mod country;
pub mod phone;

pub use auth::TokenAuthenticator;
pub use country::{CountryProvider, CountryService};
pub use phone::{LookupService, NumberType, ValidationService};
