//! Country listing service

use std::sync::Arc;

use crate::domain::value_objects::CountryList;
use crate::services::country::traits::CountryProvider;

/// Enumerates the full country reference table.
pub struct CountryService<P: CountryProvider> {
    provider: Arc<P>,
}

impl<P: CountryProvider> CountryService<P> {
    /// Create a new country service
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// The full listing, sorted ascending by display name.
    ///
    /// Deterministic for a fixed reference table; no pagination or
    /// filtering is applied.
    pub fn list_countries(&self) -> CountryList {
        let mut countries = self.provider.all();
        countries.sort_by(|a, b| a.name.cmp(&b.name));

        log::info!("Retrieved list of {} supported countries", countries.len());

        CountryList {
            total: countries.len(),
            countries,
        }
    }
}
