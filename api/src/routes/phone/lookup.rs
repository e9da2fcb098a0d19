use actix_web::{web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use pl_core::services::country::{CountryProvider, CountryService};
use pl_core::services::phone::{LookupService, ValidationService};
use pl_shared::phone::mask_phone_number;

use crate::dto::phone::PhoneQuery;
use crate::handlers::error::{to_error_response, validation_error_response};

/// Application state that holds shared services
pub struct AppState<P: CountryProvider> {
    pub lookup_service: Arc<LookupService<P>>,
    pub validation_service: Arc<ValidationService>,
    pub country_service: Arc<CountryService<P>>,
}

/// Handler for GET /lookup
///
/// Parses and classifies the `phone` query parameter, resolving the
/// originating country's metadata. Strict: unparseable input is a 400 and
/// an unresolvable region a 404.
pub async fn lookup<P>(
    state: web::Data<AppState<P>>,
    query: web::Query<PhoneQuery>,
) -> HttpResponse
where
    P: CountryProvider + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    if let Err(errors) = query.validate() {
        log::warn!("[{}] Invalid lookup query: {:?}", request_id, errors);
        return validation_error_response(&errors);
    }

    log::info!(
        "[{}] Processing lookup request for phone: {}",
        request_id,
        mask_phone_number(&query.phone)
    );

    match state
        .lookup_service
        .lookup(&query.phone, query.country.as_deref())
    {
        Ok(info) => HttpResponse::Ok().json(info),
        Err(error) => {
            log::warn!("[{}] Lookup failed: {}", request_id, error);
            to_error_response(&error)
        }
    }
}
