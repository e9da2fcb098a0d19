//! Phone number string utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is in strict E.164 format
pub fn is_e164(phone: &str) -> bool {
    INTERNATIONAL_PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for log output (e.g. +1415****2671)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 9 {
        format!(
            "{}****{}",
            &normalized[0..normalized.len() - 8],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("(415) 555-2671"), "4155552671");
        assert_eq!(normalize_phone_number("+1 415 555 2671"), "+14155552671");
    }

    #[test]
    fn test_is_e164() {
        assert!(is_e164("+14155552671"));
        assert!(is_e164("+442071838750"));
        assert!(!is_e164("4155552671")); // Missing +
        assert!(!is_e164("+0123456789")); // Invalid country code
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+14155552671"), "+141****2671");
        assert_eq!(mask_phone_number("12345"), "****");
        // Only the prefix and last four digits survive
        assert!(!mask_phone_number("+14155552671").contains("5555"));
    }
}
