//! Value objects returned by the domain services
//!
//! All records here are transient and request-scoped; they are created per
//! call and discarded after serialization.

pub mod country;
pub mod phone;

pub use country::{CountryInfo, CountryList};
pub use phone::{PhoneNumberInfo, ValidationResult};
