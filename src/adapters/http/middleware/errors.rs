//! Error envelope finishing.

use axum::{
    extract::Request,
    http::{header::ALLOW, StatusCode, Uri},
    middleware::Next,
    response::Response,
};

use crate::adapters::http::envelope::request_id_of;
use crate::adapters::http::error::ApiError;

/// Re-renders [`ApiError`] responses with the request id, and turns
/// axum's bare 405 into the error envelope.
pub async fn error_envelope(request: Request, next: Next) -> Response {
    let request_id = request_id_of(request.extensions());
    let response = next.run(request).await;

    if let Some(error) = response.extensions().get::<ApiError>() {
        return error.render(&request_id);
    }

    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        let allow = response.headers().get(ALLOW).cloned();
        let mut rendered = ApiError::method_not_allowed().render(&request_id);
        if let Some(allow) = allow {
            rendered.headers_mut().insert(ALLOW, allow);
        }
        return rendered;
    }

    response
}

/// Router fallback.
pub async fn not_found(uri: Uri) -> ApiError {
    if uri.path().starts_with("/admin/") {
        ApiError::not_found("Admin route not found")
    } else {
        ApiError::not_found("Route not found")
    }
}
