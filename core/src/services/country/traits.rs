//! Country provider interface

use crate::domain::value_objects::CountryInfo;

/// Access to the ISO 3166-1 reference table.
///
/// Implementations normalize region codes to uppercase and degrade any
/// underlying failure to `None` rather than propagating it. All lookups
/// are in-process table reads, so the interface is synchronous.
pub trait CountryProvider: Send + Sync {
    /// Resolve metadata for an alpha-2 region code, `None` when unknown
    fn resolve(&self, region_code: &str) -> Option<CountryInfo>;

    /// Every known country record, in table order
    fn all(&self) -> Vec<CountryInfo>;
}
