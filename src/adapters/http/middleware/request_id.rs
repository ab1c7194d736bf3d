//! Request ids.
//!
//! Ids are always minted by the server, `req_` followed by an eight digit
//! process-wide counter. tower-http's `SetRequestIdLayer` keeps an id the
//! client already sent, so [`discard_client_request_id`] runs first and
//! drops it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::Request,
    http::{HeaderValue, Request as HttpRequest},
    middleware::Next,
    response::Response,
};
use tower_http::request_id::{MakeRequestId, RequestId};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates `req_00000001`, `req_00000002`, ...
#[derive(Debug, Clone, Default)]
pub struct PrefixedRequestId {
    counter: Arc<AtomicU64>,
}

impl PrefixedRequestId {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MakeRequestId for PrefixedRequestId {
    fn make_request_id<B>(&mut self, _request: &HttpRequest<B>) -> Option<RequestId> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        HeaderValue::from_str(&format!("req_{:08}", n))
            .ok()
            .map(RequestId::new)
    }
}

pub async fn discard_client_request_id(mut request: Request, next: Next) -> Response {
    request.headers_mut().remove(REQUEST_ID_HEADER);
    next.run(request).await
}
