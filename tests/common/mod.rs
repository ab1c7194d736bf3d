//! Shared wiring for integration tests: the full router over an in-memory
//! store, a fixed clock and a recording webhook transport.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, HeaderMap, Request, StatusCode},
    Router,
};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use paddle_mock::adapters::http::{app_router, ApiKeyAuth, AppState};
use paddle_mock::adapters::memory::{memory_store_with_clock, FixedClock};
use paddle_mock::adapters::seed::SEED_PRODUCT_ID;
use paddle_mock::adapters::webhook::RecordingTransport;
use paddle_mock::application::handlers::admin::ResetOptions;
use paddle_mock::application::WebhookDispatcher;
use paddle_mock::domain::billing::{BillingCycle, Money};
use paddle_mock::domain::catalog::Price;
use paddle_mock::domain::foundation::{PriceId, ProductId, Timestamp};
use paddle_mock::domain::notification::WebhookSigner;
use paddle_mock::ports::Store;

pub const API_KEY: &str = "test_paddle_api_key";
pub const SIGNING_SECRET: &str = "pdl_test_signing_secret";
pub const HOOK_URL: &str = "http://hooks.test/webhook";

/// A monthly price without a trial, added next to the seed catalog.
pub const NO_TRIAL_PRICE_ID: &str = "pri_test_no_trial";

/// 2024-01-15T00:00:00Z
pub const START_UNIX: i64 = 1_705_276_800;

pub fn start() -> Timestamp {
    Timestamp::from_unix_secs(START_UNIX).unwrap()
}

pub fn signer() -> WebhookSigner {
    WebhookSigner::new(SecretString::new(SIGNING_SECRET.to_string()))
}

pub struct TestApp {
    pub router: Router,
    pub store: Store,
    pub clock: Arc<FixedClock>,
    pub transport: Arc<RecordingTransport>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// Seeded store with the default destination registered, exactly as
    /// the binary starts up.
    pub async fn new() -> Self {
        let clock = Arc::new(FixedClock::at(start()));
        let store = memory_store_with_clock(clock.clone());
        let transport = Arc::new(RecordingTransport::new());
        let dispatcher = Arc::new(WebhookDispatcher::new(
            store.clone(),
            signer(),
            transport.clone(),
        ));

        let state = AppState::new(
            store.clone(),
            dispatcher,
            ResetOptions {
                seed_data: true,
                default_webhook_url: Some(HOOK_URL.to_string()),
            },
        );
        state.reset_handler().handle().await.unwrap();

        store
            .prices
            .set(
                Price::new(
                    PriceId::new(NO_TRIAL_PRICE_ID),
                    ProductId::new(SEED_PRODUCT_ID),
                    "Monthly, billed immediately",
                    Money::new("1000", "USD"),
                    start(),
                )
                .with_billing_cycle(BillingCycle::monthly()),
            )
            .await
            .unwrap();

        let auth = ApiKeyAuth::new(SecretString::new(API_KEY.to_string()));
        Self {
            router: app_router(state, auth),
            store,
            clock,
            transport,
        }
    }

    /// Sends a request with the API key.
    pub async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        self.call_with_auth(method, uri, body, Some(&format!("Bearer {}", API_KEY)))
            .await
    }

    pub async fn call_with_auth(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        let body = match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Creates a subscription for Alice on one price; returns its id.
    pub async fn create_subscription(&self, price_id: &str) -> String {
        let response = self
            .call(
                "POST",
                "/v1/subscriptions",
                Some(serde_json::json!({
                    "customer_id": "ctm_test_alice",
                    "items": [{ "price_id": price_id, "quantity": 1 }]
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["data"]["id"].as_str().unwrap().to_string()
    }

    pub async fn event_types(&self) -> Vec<String> {
        self.store
            .events
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.event_type.to_string())
            .collect()
    }
}
