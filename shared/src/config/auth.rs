//! API token configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Placeholder token shipped for local development. Must be overridden in
/// production via the `API_TOKEN` environment variable.
pub const DEFAULT_API_TOKEN: &str = "dev-token-change-in-production";

/// Shared-secret authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// The shared secret expected in the `X-Api-Token` request header
    pub api_token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_token: String::from(DEFAULT_API_TOKEN),
        }
    }
}

impl AuthConfig {
    /// Create a new configuration with an explicit token
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
        }
    }

    /// Load the token from the `API_TOKEN` environment variable
    pub fn from_env() -> Self {
        Self {
            api_token: env::var("API_TOKEN").unwrap_or_else(|_| String::from(DEFAULT_API_TOKEN)),
        }
    }

    /// Check if the insecure development placeholder is still in use
    pub fn is_using_default_token(&self) -> bool {
        self.api_token == DEFAULT_API_TOKEN
    }
}
