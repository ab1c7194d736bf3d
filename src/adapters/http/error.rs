//! API error envelope.
//!
//! Every failure is rendered as
//! `{"error":{"type","code","detail"},"meta":{"request_id"}}`.
//!
//! Handlers do not see the request id when they fail, so
//! [`ApiError::into_response`] renders with an empty id and stashes itself
//! in the response extensions; the `error_envelope` middleware re-renders
//! it with the id assigned to the request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::billing::BillingError;

const REQUEST_ERROR: &str = "request_error";
const AUTHENTICATION_ERROR: &str = "authentication_error";
const API_ERROR: &str = "api_error";

/// A failed API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    error_type: &'static str,
    code: &'static str,
    detail: String,
}

impl ApiError {
    fn new(
        status: StatusCode,
        error_type: &'static str,
        code: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            status,
            error_type,
            code,
            detail: detail.into(),
        }
    }

    /// Body could not be read as JSON.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, REQUEST_ERROR, "bad_request", detail)
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            REQUEST_ERROR,
            "validation_error",
            detail,
        )
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, REQUEST_ERROR, "not_found", detail)
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, REQUEST_ERROR, "conflict", detail)
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            AUTHENTICATION_ERROR,
            "unauthorized",
            detail,
        )
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            REQUEST_ERROR,
            "method_not_allowed",
            "Method not allowed",
        )
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            API_ERROR,
            "internal_error",
            detail,
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Renders the envelope for a known request id.
    pub fn render(&self, request_id: &str) -> Response {
        let body = ErrorEnvelope {
            error: ErrorBody {
                error_type: self.error_type,
                code: self.code,
                detail: &self.detail,
            },
            meta: ErrorMeta { request_id },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<BillingError> for ApiError {
    fn from(err: BillingError) -> Self {
        let detail = err.message();
        match err {
            BillingError::Validation { .. } => ApiError::validation(detail),
            BillingError::NotFound { .. } => ApiError::not_found(detail),
            BillingError::Conflict { .. } => ApiError::conflict(detail),
            BillingError::Infrastructure(_) => {
                tracing::error!(error = %detail, "Request failed in the store");
                ApiError::internal(detail)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = self.render("");
        response.extensions_mut().insert(self);
        response
    }
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
    meta: ErrorMeta<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    #[serde(rename = "type")]
    error_type: &'a str,
    code: &'a str,
    detail: &'a str,
}

#[derive(Serialize)]
struct ErrorMeta<'a> {
    request_id: &'a str,
}
