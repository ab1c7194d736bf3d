//! HTTP handlers for subscription endpoints.

use axum::{
    extract::{Path, Query, State},
    response::Response,
};

use crate::adapters::http::envelope::{ApiJson, RequestMeta};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::subscription::{ActivateSubscriptionCommand, SubscriptionFilter};
use crate::domain::subscription::{Subscription, SubscriptionStatus};

use super::dto::{
    ChargeRequest, CreateSubscriptionRequest, ListSubscriptionsParams, UpdateSubscriptionRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Queries
// ════════════════════════════════════════════════════════════════════════════════

/// GET /v1/subscriptions
///
/// An unknown `status` matches nothing.
pub async fn list_subscriptions(
    State(state): State<AppState>,
    meta: RequestMeta,
    Query(params): Query<ListSubscriptionsParams>,
) -> Result<Response, ApiError> {
    let status = match params.status.as_deref().filter(|s| !s.is_empty()) {
        None => None,
        Some(name) => match SubscriptionStatus::parse(name) {
            Some(status) => Some(status),
            None => return Ok(meta.list(Vec::<Subscription>::new())),
        },
    };
    let filter = SubscriptionFilter {
        customer_id: params.customer_id.filter(|c| !c.is_empty()),
        status,
    };

    let subscriptions = state.subscription_queries().list(&filter).await?;
    Ok(meta.list(subscriptions))
}

/// GET /v1/subscriptions/:id
pub async fn get_subscription(
    State(state): State<AppState>,
    meta: RequestMeta,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let subscription = state.subscription_queries().get(&id).await?;
    Ok(meta.ok(subscription))
}

// ════════════════════════════════════════════════════════════════════════════════
// Commands
// ════════════════════════════════════════════════════════════════════════════════

/// POST /v1/subscriptions
pub async fn create_subscription(
    State(state): State<AppState>,
    meta: RequestMeta,
    ApiJson(request): ApiJson<CreateSubscriptionRequest>,
) -> Result<Response, ApiError> {
    let subscription = state
        .create_subscription_handler()
        .handle(request.into())
        .await?;
    Ok(meta.created(subscription))
}

/// PATCH /v1/subscriptions/:id
pub async fn update_subscription(
    State(state): State<AppState>,
    meta: RequestMeta,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateSubscriptionRequest>,
) -> Result<Response, ApiError> {
    let subscription = state
        .update_subscription_handler()
        .handle(request.into_command(id))
        .await?;
    Ok(meta.ok(subscription))
}

/// POST /v1/subscriptions/:id/activate
pub async fn activate_subscription(
    State(state): State<AppState>,
    meta: RequestMeta,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let subscription = state
        .activate_subscription_handler()
        .handle(ActivateSubscriptionCommand {
            subscription_id: id,
        })
        .await?;
    Ok(meta.ok(subscription))
}

/// POST /v1/subscriptions/:id/charge
///
/// Answers 201 with the (unchanged) subscription; the new transaction is
/// visible through `/v1/transactions` and the webhook.
pub async fn charge_subscription(
    State(state): State<AppState>,
    meta: RequestMeta,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<ChargeRequest>,
) -> Result<Response, ApiError> {
    let subscription = state
        .charge_subscription_handler()
        .handle(request.into_command(id))
        .await?;
    Ok(meta.created(subscription))
}
