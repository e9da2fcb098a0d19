//! Shared-secret authentication middleware for protected API endpoints.
//!
//! The middleware compares the `X-Api-Token` request header against the
//! configured secret and rejects the request with a 401 JSON body before it
//! reaches any handler. The header value is never echoed back or logged.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use pl_core::errors::DomainError;
use pl_core::services::auth::TokenAuthenticator;

use crate::handlers::error::to_error_response;

/// Name of the shared-secret request header
pub const API_TOKEN_HEADER: &str = "x-api-token";

/// Shared-secret authentication middleware factory
pub struct ApiTokenAuth {
    authenticator: Arc<TokenAuthenticator>,
}

impl ApiTokenAuth {
    /// Create the middleware for a configured authenticator
    pub fn new(authenticator: Arc<TokenAuthenticator>) -> Self {
        Self { authenticator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiTokenAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ApiTokenAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiTokenAuthMiddleware {
            service: Rc::new(service),
            authenticator: self.authenticator.clone(),
        }))
    }
}

/// Shared-secret authentication middleware service
pub struct ApiTokenAuthMiddleware<S> {
    service: Rc<S>,
    authenticator: Arc<TokenAuthenticator>,
}

impl<S, B> Service<ServiceRequest> for ApiTokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authenticator = self.authenticator.clone();

        Box::pin(async move {
            let presented = extract_api_token(&req);

            if !authenticator.authenticate(presented.as_deref()) {
                log::warn!("Unauthorized access attempt to {}", req.path());
                let response = to_error_response(&DomainError::Unauthorized).map_into_right_body();
                return Ok(req.into_response(response));
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Extracts the shared-secret token from the request headers
fn extract_api_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(API_TOKEN_HEADER)?
        .to_str()
        .ok()
        .map(|s| s.to_string())
}
