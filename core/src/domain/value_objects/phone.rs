//! Phone lookup and validation result records

use serde::{Deserialize, Serialize};

use crate::services::phone::NumberType;

/// Rich result of a strict phone number lookup.
///
/// `formatted_e164` always begins with `+`; `is_valid` implies
/// `is_possible`. `country_region` and `timezone` are carried for wire
/// compatibility and are never populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneNumberInfo {
    /// Canonical (E.164) form of the parsed number
    pub phone_number: String,
    /// Detected ISO 3166-1 alpha-2 region
    pub country_code: String,
    /// Display name of the detected country
    pub country_name: String,
    pub country_region: Option<String>,
    /// Line type label
    pub number_type: NumberType,
    pub is_valid: bool,
    pub is_possible: bool,
    pub formatted_e164: String,
    pub formatted_national: String,
    pub timezone: Option<String>,
}

/// Lenient validation outcome.
///
/// `error` is set iff parsing failed; a parseable but invalid number
/// yields `is_valid = false` with no error text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// The input as submitted (after best-effort "+" coercion)
    pub phone: String,
    pub is_valid: bool,
    pub is_possible: bool,
    /// Detected region, absent when parsing failed
    pub country_code: Option<String>,
    /// Parse failure detail, absent on success
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_info_serializes_absent_fields_as_null() {
        let info = PhoneNumberInfo {
            phone_number: String::from("+14155552671"),
            country_code: String::from("US"),
            country_name: String::from("United States of America"),
            country_region: None,
            number_type: NumberType::FixedLineOrMobile,
            is_valid: true,
            is_possible: true,
            formatted_e164: String::from("+14155552671"),
            formatted_national: String::from("(415) 555-2671"),
            timezone: None,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert!(json["country_region"].is_null());
        assert!(json["timezone"].is_null());
        assert_eq!(json["number_type"], "FIXED_LINE_OR_MOBILE");
    }

    #[test]
    fn test_validation_result_failure_shape() {
        let result = ValidationResult {
            phone: String::from("+not-a-number"),
            is_valid: false,
            is_possible: false,
            country_code: None,
            error: Some(String::from("the string supplied did not seem to be a phone number")),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_valid"], false);
        assert!(json["country_code"].is_null());
        assert!(json["error"].is_string());
    }
}
