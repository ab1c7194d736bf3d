//! Router for catalog endpoints. Paths are absolute; merge, don't nest.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_customer, create_notification_setting, get_customer, get_price, get_product,
    get_transaction, list_customers, list_events, list_notification_settings, list_prices,
    list_products, list_transactions, update_customer,
};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/products", get(list_products))
        .route("/v1/products/:id", get(get_product))
        .route("/v1/prices", get(list_prices))
        .route("/v1/prices/:id", get(get_price))
        .route("/v1/customers", get(list_customers).post(create_customer))
        .route("/v1/customers/:id", get(get_customer).patch(update_customer))
        .route("/v1/transactions", get(list_transactions))
        .route("/v1/transactions/:id", get(get_transaction))
        .route("/v1/events", get(list_events))
        .route(
            "/v1/notification-settings",
            get(list_notification_settings).post(create_notification_setting),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::adapters::http::test_support::{send, test_state};
    use crate::application::handlers::test_support::Harness;

    fn app(harness: &Harness) -> Router {
        catalog_routes().with_state(test_state(harness))
    }

    #[tokio::test]
    async fn lists_products_in_envelope() {
        let harness = Harness::new().await;

        let (status, json) = send(app(&harness), "GET", "/v1/products", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"][0]["id"], "pro_base");
        assert_eq!(json["pagination"]["estimated_total"], 1);
    }

    #[tokio::test]
    async fn price_embeds_product_only_when_asked() {
        let harness = Harness::new().await;

        let (_, plain) = send(app(&harness), "GET", "/v1/prices/pri_monthly", None).await;
        let (_, expanded) = send(
            app(&harness),
            "GET",
            "/v1/prices/pri_monthly?include=product",
            None,
        )
        .await;

        assert!(plain["data"].get("product").map_or(true, |p| p.is_null()));
        assert_eq!(expanded["data"]["product"]["id"], "pro_base");
    }

    #[tokio::test]
    async fn unknown_price_is_404() {
        let harness = Harness::new().await;

        let (status, json) = send(app(&harness), "GET", "/v1/prices/pri_nope", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["detail"], "Price not found");
    }

    #[tokio::test]
    async fn create_customer_defaults_locale() {
        let harness = Harness::new().await;

        let (status, json) = send(
            app(&harness),
            "POST",
            "/v1/customers",
            Some(r#"{"email":"carol@test.com","name":"Carol"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["locale"], "en");
        assert_eq!(json["data"]["status"], "active");
        assert!(json["data"]["id"].as_str().unwrap().starts_with("ctm_"));
    }

    #[tokio::test]
    async fn create_customer_requires_email() {
        let harness = Harness::new().await;

        let (status, json) = send(app(&harness), "POST", "/v1/customers", Some("{}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn patch_customer_changes_name() {
        let harness = Harness::new().await;

        let (status, json) = send(
            app(&harness),
            "PATCH",
            "/v1/customers/ctm_test_alice",
            Some(r#"{"name":"Alice Liddell"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["name"], "Alice Liddell");
        assert_eq!(json["data"]["email"], "alice@test.com");
    }

    #[tokio::test]
    async fn create_notification_setting_fills_defaults() {
        let harness = Harness::new().await;

        let (status, json) = send(
            app(&harness),
            "POST",
            "/v1/notification-settings",
            Some(r#"{"destination":"http://localhost:7000/hooks"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["type"], "url");
        assert_eq!(json["data"]["active"], true);
        assert_eq!(json["data"]["subscribed_events"].as_array().unwrap().len(), 7);

        let (_, listed) = send(app(&harness), "GET", "/v1/notification-settings", None).await;
        assert_eq!(listed["pagination"]["estimated_total"], 2);
    }

    #[tokio::test]
    async fn create_notification_setting_keeps_explicit_empty_values() {
        let harness = Harness::new().await;

        let (status, json) = send(
            app(&harness),
            "POST",
            "/v1/notification-settings",
            Some(r#"{"destination":"http://localhost:7000/hooks","subscribed_events":[],"api_version":0}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["subscribed_events"], serde_json::json!([]));
        assert_eq!(json["data"]["api_version"], 0);
    }

    #[tokio::test]
    async fn events_start_empty() {
        let harness = Harness::new().await;

        let (status, json) = send(app(&harness), "GET", "/v1/events", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], serde_json::json!([]));
    }
}
