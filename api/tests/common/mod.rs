//! Shared fixtures for the endpoint integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use pl_api::routes::phone::AppState;
use pl_core::services::auth::TokenAuthenticator;
use pl_core::services::country::CountryService;
use pl_core::services::phone::{LookupService, ValidationService};
use pl_infra::country::IsoCountryProvider;
use pl_shared::config::{AppConfig, AuthConfig};

pub const TEST_TOKEN: &str = "test-token";

/// Application state over the real ISO country provider
pub fn test_state() -> web::Data<AppState<IsoCountryProvider>> {
    let provider = Arc::new(IsoCountryProvider::new());
    web::Data::new(AppState {
        lookup_service: Arc::new(LookupService::new(Arc::clone(&provider))),
        validation_service: Arc::new(ValidationService::new()),
        country_service: Arc::new(CountryService::new(provider)),
    })
}

/// Configuration with a non-default API token
pub fn test_config() -> web::Data<AppConfig> {
    let mut config = AppConfig::default();
    config.auth = AuthConfig::new(TEST_TOKEN);
    web::Data::new(config)
}

pub fn test_authenticator() -> Arc<TokenAuthenticator> {
    Arc::new(TokenAuthenticator::new(TEST_TOKEN))
}
