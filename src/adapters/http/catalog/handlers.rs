//! HTTP handlers for catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    response::Response,
};

use crate::adapters::http::envelope::{ApiJson, RequestMeta};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::catalog::{TransactionFilter, UpdateCustomerCommand};

use super::dto::{
    CreateCustomerRequest, CreateNotificationSettingRequest, IncludeParams,
    ListTransactionsParams, UpdateCustomerRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Products & Prices
// ════════════════════════════════════════════════════════════════════════════════

/// GET /v1/products
pub async fn list_products(
    State(state): State<AppState>,
    meta: RequestMeta,
) -> Result<Response, ApiError> {
    Ok(meta.list(state.catalog_queries().list_products().await?))
}

/// GET /v1/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    meta: RequestMeta,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(meta.ok(state.catalog_queries().get_product(&id).await?))
}

/// GET /v1/prices
pub async fn list_prices(
    State(state): State<AppState>,
    meta: RequestMeta,
    Query(params): Query<IncludeParams>,
) -> Result<Response, ApiError> {
    let prices = state
        .catalog_queries()
        .list_prices(params.includes_product())
        .await?;
    Ok(meta.list(prices))
}

/// GET /v1/prices/:id
pub async fn get_price(
    State(state): State<AppState>,
    meta: RequestMeta,
    Path(id): Path<String>,
    Query(params): Query<IncludeParams>,
) -> Result<Response, ApiError> {
    let price = state
        .catalog_queries()
        .get_price(&id, params.includes_product())
        .await?;
    Ok(meta.ok(price))
}

// ════════════════════════════════════════════════════════════════════════════════
// Customers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /v1/customers
pub async fn list_customers(
    State(state): State<AppState>,
    meta: RequestMeta,
) -> Result<Response, ApiError> {
    Ok(meta.list(state.catalog_queries().list_customers().await?))
}

/// GET /v1/customers/:id
pub async fn get_customer(
    State(state): State<AppState>,
    meta: RequestMeta,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(meta.ok(state.catalog_queries().get_customer(&id).await?))
}

/// POST /v1/customers
pub async fn create_customer(
    State(state): State<AppState>,
    meta: RequestMeta,
    ApiJson(request): ApiJson<CreateCustomerRequest>,
) -> Result<Response, ApiError> {
    let customer = state
        .create_customer_handler()
        .handle(request.into())
        .await?;
    Ok(meta.created(customer))
}

/// PATCH /v1/customers/:id
pub async fn update_customer(
    State(state): State<AppState>,
    meta: RequestMeta,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateCustomerRequest>,
) -> Result<Response, ApiError> {
    let customer = state
        .update_customer_handler()
        .handle(UpdateCustomerCommand {
            customer_id: id,
            changes: request.into(),
        })
        .await?;
    Ok(meta.ok(customer))
}

// ════════════════════════════════════════════════════════════════════════════════
// Transactions & Events
// ════════════════════════════════════════════════════════════════════════════════

/// GET /v1/transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    meta: RequestMeta,
    Query(params): Query<ListTransactionsParams>,
) -> Result<Response, ApiError> {
    let filter = TransactionFilter::from(params);
    Ok(meta.list(state.catalog_queries().list_transactions(&filter).await?))
}

/// GET /v1/transactions/:id
pub async fn get_transaction(
    State(state): State<AppState>,
    meta: RequestMeta,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(meta.ok(state.catalog_queries().get_transaction(&id).await?))
}

/// GET /v1/events
pub async fn list_events(
    State(state): State<AppState>,
    meta: RequestMeta,
) -> Result<Response, ApiError> {
    Ok(meta.list(state.catalog_queries().list_events().await?))
}

// ════════════════════════════════════════════════════════════════════════════════
// Notification settings
// ════════════════════════════════════════════════════════════════════════════════

/// GET /v1/notification-settings
pub async fn list_notification_settings(
    State(state): State<AppState>,
    meta: RequestMeta,
) -> Result<Response, ApiError> {
    Ok(meta.list(state.catalog_queries().list_notification_settings().await?))
}

/// POST /v1/notification-settings
pub async fn create_notification_setting(
    State(state): State<AppState>,
    meta: RequestMeta,
    ApiJson(request): ApiJson<CreateNotificationSettingRequest>,
) -> Result<Response, ApiError> {
    let setting = state
        .create_notification_setting_handler()
        .handle(request.into())
        .await?;
    Ok(meta.created(setting))
}
