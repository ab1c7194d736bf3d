//! API key authentication.
//!
//! Routes under `/v1/` require `Authorization: Bearer <api_key>`.
//! `/admin/` and `/ping` stay open. The whole check is skipped when auth
//! is disabled in configuration.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::adapters::http::error::ApiError;

const PROTECTED_PREFIX: &str = "/v1/";

/// Auth middleware state.
#[derive(Clone)]
pub struct ApiKeyAuth {
    enabled: bool,
    api_key: SecretString,
}

impl ApiKeyAuth {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            enabled: true,
            api_key,
        }
    }

    /// Lets every request through.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            api_key: SecretString::new(String::new()),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    fn accepts(&self, token: &str) -> bool {
        let expected = self.api_key.expose_secret().as_bytes();
        token.len() == expected.len() && bool::from(token.as_bytes().ct_eq(expected))
    }
}

impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("enabled", &self.enabled)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

pub async fn require_api_key(
    State(auth): State<ApiKeyAuth>,
    request: Request,
    next: Next,
) -> Response {
    if !auth.enabled || !request.uri().path().starts_with(PROTECTED_PREFIX) {
        return next.run(request).await;
    }

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match header {
        None => ApiError::unauthorized("Missing Authorization header").into_response(),
        Some(value) => match value.strip_prefix("Bearer ") {
            Some(token) if auth.accepts(token) => next.run(request).await,
            _ => {
                tracing::debug!(path = %request.uri().path(), "Rejected API key");
                ApiError::unauthorized("Invalid API key").into_response()
            }
        },
    }
}
