//! CORS middleware configuration.
//!
//! The allowed origins come from the `CORS_ORIGINS` environment variable
//! (comma-separated). The default is a permissive `*` configuration, which
//! matches the original deployment of this service behind a trusted
//! gateway; restricted deployments list their origins explicitly and get
//! credential support.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use pl_shared::config::CorsConfig;

/// Creates a CORS middleware instance for the given configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-api-token"),
        ])
        .max_age(3600);

    if config.allows_any_origin() {
        log::info!("Configuring permissive CORS (any origin)");
        // Wildcard origins cannot carry credentials
        cors.allow_any_origin()
    } else {
        let mut cors = cors.supports_credentials();
        for origin in &config.allowed_origins {
            log::info!("Adding allowed CORS origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
        cors
    }
}
