//! API middleware components

pub mod auth;
pub mod cors;

pub use auth::ApiTokenAuth;
