use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use pl_core::services::country::CountryProvider;
use pl_shared::phone::mask_phone_number;

use crate::dto::phone::PhoneQuery;
use crate::handlers::error::validation_error_response;

use super::AppState;

/// Handler for GET /validate
///
/// Lenient counterpart of `/lookup`: any reachable request answers 200,
/// with parse failures encoded in the result body instead of an HTTP
/// error.
pub async fn validate<P>(
    state: web::Data<AppState<P>>,
    query: web::Query<PhoneQuery>,
) -> HttpResponse
where
    P: CountryProvider + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    if let Err(errors) = query.validate() {
        log::warn!("[{}] Invalid validate query: {:?}", request_id, errors);
        return validation_error_response(&errors);
    }

    log::info!(
        "[{}] Processing validate request for phone: {}",
        request_id,
        mask_phone_number(&query.phone)
    );

    let result = state
        .validation_service
        .validate(&query.phone, query.country.as_deref());

    HttpResponse::Ok().json(result)
}
