//! Router for admin endpoints, mounted at `/admin`.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{advance_time, reset, trigger_webhook};

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/advance-time/:id", post(advance_time))
        .route("/trigger-webhook/:event_type", post(trigger_webhook))
        .route("/reset", post(reset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::adapters::http::test_support::{send, test_state};
    use crate::application::handlers::subscription::{
        CreateSubscriptionCommand, CreateSubscriptionHandler, ItemRequest,
    };
    use crate::application::handlers::test_support::Harness;

    fn app(harness: &Harness) -> Router {
        Router::new()
            .nest("/admin", admin_routes())
            .with_state(test_state(harness))
    }

    async fn active_subscription(harness: &Harness) -> String {
        CreateSubscriptionHandler::new(harness.store.clone(), harness.dispatcher.clone())
            .handle(CreateSubscriptionCommand {
                customer_id: "ctm_test_alice".to_string(),
                items: vec![ItemRequest::new("pri_monthly", 1)],
                ..Default::default()
            })
            .await
            .unwrap()
            .id
            .to_string()
    }

    #[tokio::test]
    async fn advance_renews_active_subscription() {
        let harness = Harness::new().await;
        let id = active_subscription(&harness).await;

        let (status, json) = send(app(&harness), "POST", &format!("/admin/advance-time/{}", id), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "active");
    }

    #[tokio::test]
    async fn advance_with_fail_true_goes_past_due() {
        let harness = Harness::new().await;
        let id = active_subscription(&harness).await;

        let (_, json) = send(
            app(&harness),
            "POST",
            &format!("/admin/advance-time/{}?fail=true", id),
            None,
        )
        .await;

        assert_eq!(json["data"]["status"], "past_due");
    }

    #[tokio::test]
    async fn advance_with_other_fail_value_renews() {
        let harness = Harness::new().await;
        let id = active_subscription(&harness).await;

        let (_, json) = send(
            app(&harness),
            "POST",
            &format!("/admin/advance-time/{}?fail=1", id),
            None,
        )
        .await;

        assert_eq!(json["data"]["status"], "active");
    }

    #[tokio::test]
    async fn advance_unknown_subscription_is_404() {
        let harness = Harness::new().await;

        let (status, _) = send(app(&harness), "POST", "/admin/advance-time/sub_nope", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_ids_leave_no_lock_behind() {
        let harness = Harness::new().await;

        for n in 0..50 {
            let uri = format!("/admin/advance-time/sub_random_{}", n);
            let (status, _) = send(app(&harness), "POST", &uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
        send(app(&harness), "POST", "/admin/reset", None).await;

        assert_eq!(harness.locks.registered(), 0);
    }

    #[tokio::test]
    async fn trigger_uses_body_as_payload() {
        let harness = Harness::new().await;

        let (status, json) = send(
            app(&harness),
            "POST",
            "/admin/trigger-webhook/customer.imported",
            Some(r#"{"customer_id":"ctm_1"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "triggered");
        assert_eq!(json["data"]["event_type"], "customer.imported");

        let events = harness.store.events.list().await.unwrap();
        let body = serde_json::to_value(&events[0]).unwrap();
        assert_eq!(body["data"]["customer_id"], "ctm_1");
    }

    #[tokio::test]
    async fn trigger_without_json_sends_manual_payload() {
        let harness = Harness::new().await;

        send(
            app(&harness),
            "POST",
            "/admin/trigger-webhook/subscription.updated",
            Some("not json"),
        )
        .await;

        let bodies = harness.transport.bodies();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["data"], serde_json::json!({"triggered": "manual"}));
    }

    #[tokio::test]
    async fn reset_empties_the_store() {
        let harness = Harness::new().await;
        active_subscription(&harness).await;

        let (status, json) = send(app(&harness), "POST", "/admin/reset", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "reset");
        assert!(harness.store.subscriptions.list().await.unwrap().is_empty());
        assert!(harness.store.events.list().await.unwrap().is_empty());
    }
}
