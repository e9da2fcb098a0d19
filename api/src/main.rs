use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};
use std::sync::Arc;

use pl_api::app::create_app;
use pl_api::routes::phone::AppState;
use pl_core::services::auth::TokenAuthenticator;
use pl_core::services::country::CountryService;
use pl_core::services::phone::{LookupService, ValidationService};
use pl_infra::country::IsoCountryProvider;
use pl_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Load configuration and initialize the logger
    let config = AppConfig::from_env();
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    info!("Starting Phone Number Lookup API");

    if config.auth.is_using_default_token() {
        warn!("API_TOKEN is not set; using the insecure development default");
    }

    // One country provider instance backs both services so they share the
    // process-wide metadata cache
    let provider = Arc::new(IsoCountryProvider::new());
    let state = web::Data::new(AppState {
        lookup_service: Arc::new(LookupService::new(Arc::clone(&provider))),
        validation_service: Arc::new(ValidationService::new()),
        country_service: Arc::new(CountryService::new(provider)),
    });
    let authenticator = Arc::new(TokenAuthenticator::new(config.auth.api_token.clone()));

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    info!("Server will bind to: {}", bind_address);

    let app_config = web::Data::new(config);
    let mut server = HttpServer::new(move || {
        create_app(
            state.clone(),
            app_config.clone(),
            Arc::clone(&authenticator),
        )
    });
    if workers > 0 {
        server = server.workers(workers);
    }
    server.bind(&bind_address)?.run().await
}
