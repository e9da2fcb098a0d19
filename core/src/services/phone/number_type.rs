//! Line type classification

use serde::{Deserialize, Serialize};

/// Line type of a phone number.
///
/// Closed label set; every engine-reported type outside it collapses into
/// `Unknown`, so classification is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberType {
    Mobile,
    FixedLine,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Unknown,
}

impl NumberType {
    /// The stable wire label for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberType::Mobile => "MOBILE",
            NumberType::FixedLine => "FIXED_LINE",
            NumberType::FixedLineOrMobile => "FIXED_LINE_OR_MOBILE",
            NumberType::TollFree => "TOLL_FREE",
            NumberType::PremiumRate => "PREMIUM_RATE",
            NumberType::SharedCost => "SHARED_COST",
            NumberType::Voip => "VOIP",
            NumberType::PersonalNumber => "PERSONAL_NUMBER",
            NumberType::Pager => "PAGER",
            NumberType::Uan => "UAN",
            NumberType::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for NumberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<phonenumber::Type> for NumberType {
    fn from(kind: phonenumber::Type) -> Self {
        match kind {
            phonenumber::Type::Mobile => NumberType::Mobile,
            phonenumber::Type::FixedLine => NumberType::FixedLine,
            phonenumber::Type::FixedLineOrMobile => NumberType::FixedLineOrMobile,
            phonenumber::Type::TollFree => NumberType::TollFree,
            phonenumber::Type::PremiumRate => NumberType::PremiumRate,
            phonenumber::Type::SharedCost => NumberType::SharedCost,
            phonenumber::Type::Voip => NumberType::Voip,
            phonenumber::Type::PersonalNumber => NumberType::PersonalNumber,
            phonenumber::Type::Pager => NumberType::Pager,
            phonenumber::Type::Uan => NumberType::Uan,
            _ => NumberType::Unknown,
        }
    }
}
