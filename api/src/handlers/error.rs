//! Domain error to HTTP response mapping

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use validator::ValidationErrors;

use pl_core::errors::DomainError;
use pl_shared::errors::{error_codes, ErrorResponse};

/// Convert a domain error into its HTTP response.
///
/// `Unauthorized` and `Internal` deliberately carry generic messages so
/// neither token material nor internal failure detail reaches the client.
pub fn to_error_response(error: &DomainError) -> HttpResponse {
    let (status, code, message) = match error {
        DomainError::InvalidFormat { .. } => (
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_PHONE_FORMAT,
            String::from("Invalid phone number format"),
        ),
        DomainError::CountryNotFound { region } => (
            StatusCode::NOT_FOUND,
            error_codes::COUNTRY_NOT_FOUND,
            format!("Country not found: {}", region),
        ),
        DomainError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            String::from("Invalid or missing API token"),
        ),
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                String::from("Internal server error"),
            )
        }
    };

    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// Convert DTO validation failures into a 400 response with per-field detail.
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        "Invalid request parameters",
    );
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field, messages);
    }

    HttpResponse::BadRequest().json(response)
}
