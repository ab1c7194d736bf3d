//! HTTP handlers for admin endpoints.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    response::Response,
};

use crate::adapters::http::envelope::RequestMeta;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::admin::TriggerWebhookCommand;
use crate::application::handlers::subscription::AdvanceTimeCommand;

use super::dto::{AdvanceTimeParams, StatusResponse, TriggeredResponse};

/// POST /admin/advance-time/:id
pub async fn advance_time(
    State(state): State<AppState>,
    meta: RequestMeta,
    Path(id): Path<String>,
    Query(params): Query<AdvanceTimeParams>,
) -> Result<Response, ApiError> {
    let subscription = state
        .advance_time_handler()
        .handle(AdvanceTimeCommand {
            subscription_id: id,
            payment_fails: params.payment_fails(),
        })
        .await?;
    Ok(meta.ok(subscription))
}

/// POST /admin/trigger-webhook/:event_type
///
/// The raw body is the event payload. Anything that is not JSON is
/// replaced by the manual-trigger payload.
pub async fn trigger_webhook(
    State(state): State<AppState>,
    meta: RequestMeta,
    Path(event_type): Path<String>,
    body: Bytes,
) -> Response {
    let payload = serde_json::from_slice::<serde_json::Value>(&body).ok();
    let event = state
        .trigger_webhook_handler()
        .handle(TriggerWebhookCommand {
            event_type,
            payload,
        })
        .await;

    meta.ok(TriggeredResponse {
        status: "triggered",
        event_type: event.event_type.to_string(),
    })
}

/// POST /admin/reset
pub async fn reset(State(state): State<AppState>, meta: RequestMeta) -> Result<Response, ApiError> {
    state.reset_handler().handle().await?;
    Ok(meta.ok(StatusResponse { status: "reset" }))
}
