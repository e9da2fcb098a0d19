//! # Phone Lookup Core
//!
//! Core business logic and domain layer for the phone lookup backend.
//! This crate contains the domain value records, the lookup/validation
//! services built on the numbering-plan engine, the country provider
//! interface, and the error types shared across the application.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
