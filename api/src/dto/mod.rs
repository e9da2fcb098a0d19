//! Request and response DTOs for the HTTP surface

pub mod phone;

pub use phone::{HealthResponse, PhoneQuery};
