//! Top-level router and middleware stack.
//!
//! Outermost first: client request ids are discarded, a `req_` id is
//! assigned and echoed back, the request is traced, CORS is answered,
//! error bodies get their request id, and `/v1/` is authenticated.

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::admin::admin_routes;
use super::catalog::catalog_routes;
use super::middleware::{
    discard_client_request_id, error_envelope, not_found, require_api_key, ApiKeyAuth,
    PrefixedRequestId,
};
use super::state::AppState;
use super::subscriptions::subscription_routes;

/// GET /ping. Open and unwrapped.
pub async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn app_router(state: AppState, auth: ApiKeyAuth) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .merge(catalog_routes())
        .nest("/v1/subscriptions", subscription_routes())
        .nest("/admin", admin_routes())
        .fallback(not_found)
        .with_state(state)
        .layer(from_fn_with_state(auth, require_api_key))
        .layer(from_fn(error_envelope))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PATCH])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(PrefixedRequestId::new()))
        .layer(from_fn(discard_client_request_id))
}
