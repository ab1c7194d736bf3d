//! Request helpers for router tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::application::handlers::admin::ResetOptions;
use crate::application::handlers::test_support::Harness;

use super::state::AppState;

pub fn test_state(harness: &Harness) -> AppState {
    AppState {
        store: harness.store.clone(),
        dispatcher: harness.dispatcher.clone(),
        locks: harness.locks.clone(),
        reset: ResetOptions::default(),
    }
}

/// Sends one request and decodes the JSON body (`Null` when empty).
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
