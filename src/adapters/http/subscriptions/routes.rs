//! Router for subscription endpoints, mounted at `/v1/subscriptions`.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    activate_subscription, charge_subscription, create_subscription, get_subscription,
    list_subscriptions, update_subscription,
};

pub fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_subscriptions).post(create_subscription))
        .route("/:id", get(get_subscription).patch(update_subscription))
        .route("/:id/activate", post(activate_subscription))
        .route("/:id/charge", post(charge_subscription))
}
