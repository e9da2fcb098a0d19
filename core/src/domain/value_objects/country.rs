//! Country reference records

use serde::{Deserialize, Serialize};

/// One ISO 3166-1 country/territory record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    /// Display name
    pub name: String,
    /// Two-letter code (e.g. "US")
    pub alpha_2: String,
    /// Three-letter code (e.g. "USA")
    pub alpha_3: String,
    /// Zero-padded numeric code (e.g. "840")
    pub numeric: String,
}

/// The full country listing with its count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryList {
    pub total: usize,
    pub countries: Vec<CountryInfo>,
}
