//! Shared parse front-end for the lookup and validation services

use phonenumber::{country, PhoneNumber};

/// A successfully parsed input.
#[derive(Debug)]
pub(crate) struct ParsedPhone {
    /// The input after best-effort "+" coercion
    pub input: String,
    pub number: PhoneNumber,
}

/// A parse failure, still carrying the (possibly coerced) input.
#[derive(Debug)]
pub(crate) struct ParseFailure {
    pub input: String,
    pub reason: String,
}

/// Parse a raw phone string with an optional alpha-2 region hint.
///
/// When the input lacks a leading `+` and no hint is given, a `+` is
/// prepended as a best-effort international-format coercion. With a hint
/// present the input is passed through unchanged and the hint alone
/// carries the region. An unrecognized hint degrades to no hint.
pub(crate) fn parse_phone(
    phone: &str,
    country_hint: Option<&str>,
) -> Result<ParsedPhone, ParseFailure> {
    let input = if !phone.starts_with('+') && country_hint.is_none() {
        format!("+{}", phone)
    } else {
        phone.to_string()
    };

    let region = country_hint
        .and_then(|hint| hint.trim().to_ascii_uppercase().parse::<country::Id>().ok());

    match phonenumber::parse(region, &input) {
        Ok(number) => Ok(ParsedPhone { input, number }),
        Err(e) => Err(ParseFailure {
            input,
            reason: e.to_string(),
        }),
    }
}

/// The alpha-2 region the engine inferred for a parsed number.
pub(crate) fn region_of(number: &PhoneNumber) -> Option<String> {
    number.country().id().map(|id| id.as_ref().to_string())
}
