use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters shared by `/lookup` and `/validate`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PhoneQuery {
    /// Raw phone number, E.164 or national format
    /// Examples: "+14155552671", "4155552671"
    #[validate(length(min = 1))]
    pub phone: String,

    /// Optional ISO 3166-1 alpha-2 region hint
    /// Examples: "US", "GB"
    #[validate(length(max = 2))]
    pub country: Option<String>,
}

/// Body of the unauthenticated `/health` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// False while the insecure development token is still in use
    pub api_token_configured: bool,
}
