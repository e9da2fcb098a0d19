//! Lenient phone number validation service

use phonenumber::Mode;

use pl_shared::phone::{is_e164, mask_phone_number};

use crate::domain::value_objects::ValidationResult;

use super::parser::{parse_phone, region_of};

/// Validates phone numbers without ever failing outward.
///
/// Parse failures are folded into the result record so the endpoint can be
/// used for bulk/lenient checking; only validity and possibility are
/// computed here, no classification or country resolution.
#[derive(Debug, Default)]
pub struct ValidationService;

impl ValidationService {
    /// Create a new validation service
    pub fn new() -> Self {
        Self
    }

    /// Validate a phone number, reporting failures in-band.
    pub fn validate(&self, phone: &str, country_hint: Option<&str>) -> ValidationResult {
        match parse_phone(phone, country_hint) {
            Ok(parsed) => {
                let is_valid = phonenumber::is_valid(&parsed.number);
                let formatted_e164 = phonenumber::format(&parsed.number)
                    .mode(Mode::E164)
                    .to_string();
                let is_possible = is_valid || is_e164(&formatted_e164);
                let country_code = region_of(&parsed.number);

                log::info!(
                    "Successfully validated phone number from country: {}",
                    country_code.as_deref().unwrap_or("unknown")
                );

                ValidationResult {
                    phone: parsed.input,
                    is_valid,
                    is_possible,
                    country_code,
                    error: None,
                }
            }
            Err(failure) => {
                log::warn!(
                    "Phone number validation error for {}: {}",
                    mask_phone_number(&failure.input),
                    failure.reason
                );

                ValidationResult {
                    phone: failure.input,
                    is_valid: false,
                    is_possible: false,
                    country_code: None,
                    error: Some(failure.reason),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_number() {
        let service = ValidationService::new();
        let result = service.validate("+14155552671", None);

        assert_eq!(result.phone, "+14155552671");
        assert!(result.is_valid);
        assert!(result.is_possible);
        assert_eq!(result.country_code.as_deref(), Some("US"));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_validate_malformed_input_never_errors() {
        let service = ValidationService::new();
        let result = service.validate("not-a-number", None);

        assert!(!result.is_valid);
        assert!(!result.is_possible);
        assert!(result.country_code.is_none());
        assert!(result.error.as_deref().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn test_validate_echoes_coerced_input() {
        let service = ValidationService::new();
        let result = service.validate("14155552671", None);
        assert_eq!(result.phone, "+14155552671");
    }

    #[test]
    fn test_validate_with_hint_keeps_input_unprefixed() {
        let service = ValidationService::new();
        let result = service.validate("4155552671", Some("US"));
        assert_eq!(result.phone, "4155552671");
        assert_eq!(result.country_code.as_deref(), Some("US"));
    }

    #[test]
    fn test_error_unset_for_parseable_but_invalid_number() {
        let service = ValidationService::new();
        // Parses under the US hint but fails the numbering-plan rules
        let result = service.validate("1234567890", Some("US"));
        assert!(!result.is_valid);
        assert!(result.error.is_none());
    }
}
