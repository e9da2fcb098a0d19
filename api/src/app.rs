//! Application factory
//!
//! Builds the Actix-web application with all middleware and routes wired
//! up; integration tests reuse the same factory against a test state.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use pl_core::services::auth::TokenAuthenticator;
use pl_core::services::country::CountryProvider;
use pl_shared::config::AppConfig;
use pl_shared::errors::{error_codes, ErrorResponse};

use crate::dto::phone::HealthResponse;
use crate::middleware::auth::ApiTokenAuth;
use crate::middleware::cors::create_cors;
use crate::routes::phone::{countries, lookup, validate, AppState};

/// Service identifier reported by `/health`
pub const SERVICE_NAME: &str = "phone-lookup-api";

/// Create and configure the application with all dependencies
pub fn create_app<P>(
    state: web::Data<AppState<P>>,
    config: web::Data<AppConfig>,
    authenticator: Arc<TokenAuthenticator>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    P: CountryProvider + 'static,
{
    let cors = create_cors(&config.cors);

    App::new()
        // Add application state
        .app_data(state)
        .app_data(config)
        // Add middleware (CORS runs before logging)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint, deliberately unauthenticated
        .route("/health", web::get().to(health_check))
        // Authenticated API surface
        .service(
            web::scope("")
                .wrap(ApiTokenAuth::new(authenticator))
                .route("/lookup", web::get().to(lookup::lookup::<P>))
                .route("/validate", web::get().to(validate::validate::<P>))
                .route(
                    "/supported-countries",
                    web::get().to(countries::supported_countries::<P>),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check(config: web::Data<AppConfig>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: String::from("healthy"),
        service: String::from(SERVICE_NAME),
        version: String::from(env!("CARGO_PKG_VERSION")),
        api_token_configured: !config.auth.is_using_default_token(),
    })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
