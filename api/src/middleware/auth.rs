//! Session authentication middleware for protecting API endpoints.
//!
//! The middleware reads the session token from its cookie, verifies it
//! through the core token service, and injects the session context into
//! the request. A request carrying anything other than a correctly signed,
//! unexpired token gets a uniform 401: the response body never says
//! whether the token was missing, malformed, tampered, or expired.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use sg_core::domain::token::Verification;
use sg_core::services::token::TokenService;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

/// Session context injected into authenticated requests
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Subject extracted from the verified token
    pub subject: String,
    /// Issuance instant of the presented token
    pub issued_at: DateTime<Utc>,
}

/// Session authentication middleware factory
pub struct SessionAuth {
    token_service: Arc<TokenService>,
    cookie_name: String,
}

impl SessionAuth {
    /// Creates a session authentication middleware verifying the named
    /// cookie through the given token service
    pub fn new(token_service: Arc<TokenService>, cookie_name: impl Into<String>) -> Self {
        Self {
            token_service,
            cookie_name: cookie_name.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
            cookie_name: self.cookie_name.clone(),
        }))
    }
}

/// Session authentication middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
    cookie_name: String,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);
        let cookie_name = self.cookie_name.clone();

        Box::pin(async move {
            let token = req.cookie(&cookie_name).map(|c| c.value().to_string());

            // A missing cookie and a rejected token get the same answer.
            let context = match token.as_deref().map(|t| token_service.verify(t)) {
                Some(Verification::Valid { subject, issued_at }) => SessionContext {
                    subject,
                    issued_at,
                },
                Some(Verification::Invalid) | None => {
                    return Err(ErrorUnauthorized("Authentication required"));
                }
            };

            req.extensions_mut().insert(context);

            service.call(req).await
        })
    }
}

/// Extractor for required session authentication
impl FromRequest for SessionContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<SessionContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
