//! Strict phone number lookup service

use std::sync::Arc;

use phonenumber::Mode;

use pl_shared::phone::{is_e164, mask_phone_number};

use crate::domain::value_objects::PhoneNumberInfo;
use crate::errors::{DomainError, DomainResult};
use crate::services::country::CountryProvider;

use super::number_type::NumberType;
use super::parser::{parse_phone, region_of};

/// Orchestrates parse → region inference → country resolution →
/// classification → formatting for a single phone number.
pub struct LookupService<P: CountryProvider> {
    /// Country metadata source
    countries: Arc<P>,
}

impl<P: CountryProvider> LookupService<P> {
    /// Create a new lookup service
    pub fn new(countries: Arc<P>) -> Self {
        Self { countries }
    }

    /// Look up a phone number.
    ///
    /// Fails with `InvalidFormat` when the input cannot be parsed and with
    /// `CountryNotFound` when the inferred region has no metadata record.
    pub fn lookup(&self, phone: &str, country_hint: Option<&str>) -> DomainResult<PhoneNumberInfo> {
        let parsed = parse_phone(phone, country_hint).map_err(|failure| {
            log::error!(
                "Phone number parsing error for {}: {}",
                mask_phone_number(&failure.input),
                failure.reason
            );
            DomainError::InvalidFormat {
                message: failure.reason,
            }
        })?;

        // The engine's inferred region wins over the caller's hint
        let region = region_of(&parsed.number).unwrap_or_else(|| String::from("unknown"));
        let country = self
            .countries
            .resolve(&region)
            .ok_or_else(|| DomainError::CountryNotFound {
                region: region.clone(),
            })?;

        let number_type =
            NumberType::from(parsed.number.number_type(&phonenumber::metadata::DATABASE));
        let is_valid = phonenumber::is_valid(&parsed.number);
        let formatted_e164 = phonenumber::format(&parsed.number).mode(Mode::E164).to_string();
        let formatted_national = phonenumber::format(&parsed.number)
            .mode(Mode::National)
            .to_string();
        // Possibility is the weaker length/shape check; validity subsumes it
        let is_possible = is_valid || is_e164(&formatted_e164);

        log::info!("Successfully looked up phone number from country: {}", region);

        Ok(PhoneNumberInfo {
            phone_number: formatted_e164.clone(),
            country_code: country.alpha_2,
            country_name: country.name,
            country_region: None,
            number_type,
            is_valid,
            is_possible,
            formatted_e164,
            formatted_national,
            timezone: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CountryInfo;

    struct StubProvider {
        known: Vec<CountryInfo>,
    }

    impl StubProvider {
        fn with_us() -> Self {
            Self {
                known: vec![CountryInfo {
                    name: String::from("United States of America"),
                    alpha_2: String::from("US"),
                    alpha_3: String::from("USA"),
                    numeric: String::from("840"),
                }],
            }
        }

        fn empty() -> Self {
            Self { known: Vec::new() }
        }
    }

    impl CountryProvider for StubProvider {
        fn resolve(&self, region_code: &str) -> Option<CountryInfo> {
            let code = region_code.to_ascii_uppercase();
            self.known.iter().find(|c| c.alpha_2 == code).cloned()
        }

        fn all(&self) -> Vec<CountryInfo> {
            self.known.clone()
        }
    }

    #[test]
    fn test_lookup_e164_number() {
        let service = LookupService::new(Arc::new(StubProvider::with_us()));
        let info = service.lookup("+14155552671", None).unwrap();

        assert_eq!(info.country_code, "US");
        assert_eq!(info.country_name, "United States of America");
        assert!(info.is_valid);
        assert!(info.is_possible);
        assert_eq!(info.formatted_e164, "+14155552671");
        assert!(info.formatted_e164.starts_with('+'));
        assert!(info.country_region.is_none());
        assert!(info.timezone.is_none());
    }

    #[test]
    fn test_lookup_with_region_hint_matches_e164_form() {
        let service = LookupService::new(Arc::new(StubProvider::with_us()));
        let hinted = service.lookup("4155552671", Some("US")).unwrap();
        let international = service.lookup("+14155552671", None).unwrap();

        assert_eq!(hinted.formatted_e164, international.formatted_e164);
        assert_eq!(hinted.country_code, international.country_code);
        assert_eq!(hinted.is_valid, international.is_valid);
    }

    #[test]
    fn test_lookup_invalid_input_fails_with_invalid_format() {
        let service = LookupService::new(Arc::new(StubProvider::with_us()));
        let err = service.lookup("not-a-number", None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidFormat { .. }));
    }

    #[test]
    fn test_lookup_unresolvable_region_fails_with_country_not_found() {
        let service = LookupService::new(Arc::new(StubProvider::empty()));
        let err = service.lookup("+14155552671", None).unwrap_err();
        assert!(matches!(err, DomainError::CountryNotFound { .. }));
    }

    #[test]
    fn test_valid_implies_possible() {
        let service = LookupService::new(Arc::new(StubProvider::with_us()));
        let info = service.lookup("+14155552671", None).unwrap();
        assert!(!info.is_valid || info.is_possible);
    }

    #[test]
    fn test_e164_round_trip_is_stable() {
        let service = LookupService::new(Arc::new(StubProvider::with_us()));
        let first = service.lookup("+1 (415) 555-2671", None).unwrap();
        let second = service.lookup(&first.formatted_e164, None).unwrap();
        assert_eq!(first.formatted_e164, second.formatted_e164);
        assert_eq!(first.country_code, second.country_code);
    }
}
