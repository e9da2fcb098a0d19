//! Phone lookup route handlers
//!
//! This module contains the authenticated endpoints:
//! - `GET /lookup` - strict lookup with country metadata
//! - `GET /validate` - lenient validation
//! - `GET /supported-countries` - full ISO country listing

pub mod countries;
pub mod lookup;
pub mod validate;

pub use lookup::AppState;
