use actix_web::{web, HttpResponse};

use pl_core::services::country::CountryProvider;

use super::AppState;

/// Handler for GET /supported-countries
///
/// Returns every ISO 3166-1 record, sorted by display name.
pub async fn supported_countries<P>(state: web::Data<AppState<P>>) -> HttpResponse
where
    P: CountryProvider + 'static,
{
    HttpResponse::Ok().json(state.country_service.list_countries())
}
