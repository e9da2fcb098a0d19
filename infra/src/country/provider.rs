//! ISO 3166-1 country provider with bounded memoization

use moka::sync::Cache;

use pl_core::domain::value_objects::CountryInfo;
use pl_core::services::country::CountryProvider;

/// Upper bound on distinct memoized region codes. The alpha-2 space is
/// smaller than this, so in practice nothing is ever evicted.
const COUNTRY_CACHE_CAPACITY: u64 = 256;

/// `CountryProvider` backed by the bundled ISO 3166-1 table.
///
/// Results are memoized per normalized (uppercased) region code, with
/// misses cached as absence markers so unknown codes are not re-queried
/// either. The cache lives for the life of the process and needs no
/// teardown; concurrent readers may recompute a missing entry redundantly,
/// which is harmless.
pub struct IsoCountryProvider {
    cache: Cache<String, Option<CountryInfo>>,
}

impl IsoCountryProvider {
    /// Create a provider with an empty cache
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().max_capacity(COUNTRY_CACHE_CAPACITY).build(),
        }
    }

    fn project(record: &rust_iso3166::CountryCode) -> CountryInfo {
        CountryInfo {
            name: record.name.to_string(),
            alpha_2: record.alpha2.to_string(),
            alpha_3: record.alpha3.to_string(),
            numeric: format!("{:03}", record.numeric),
        }
    }
}

impl Default for IsoCountryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryProvider for IsoCountryProvider {
    fn resolve(&self, region_code: &str) -> Option<CountryInfo> {
        let code = region_code.trim().to_ascii_uppercase();

        self.cache.get_with(code.clone(), || {
            match rust_iso3166::from_alpha2(&code) {
                Some(record) => Some(Self::project(&record)),
                None => {
                    log::debug!("No ISO 3166 record for region code: {}", code);
                    None
                }
            }
        })
    }

    fn all(&self) -> Vec<CountryInfo> {
        rust_iso3166::ALL.iter().map(Self::project).collect()
    }
}
