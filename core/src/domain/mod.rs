//! Domain layer: value records produced by the services

pub mod value_objects;

pub use value_objects::{CountryInfo, CountryList, PhoneNumberInfo, ValidationResult};
