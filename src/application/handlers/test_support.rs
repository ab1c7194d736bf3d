//! Shared wiring for handler tests.

use std::sync::Arc;

use secrecy::SecretString;

use crate::adapters::memory::{memory_store_with_clock, FixedClock};
use crate::adapters::webhook::RecordingTransport;
use crate::application::{SubscriptionLocks, WebhookDispatcher};
use crate::domain::catalog::{Customer, NewCustomer};
use crate::domain::foundation::{CustomerId, NotificationSettingId, Timestamp};
use crate::domain::notification::{NewNotificationSetting, NotificationSetting, WebhookSigner};
use crate::domain::subscription::fixtures::{monthly_price, product, start, trial_price};
use crate::ports::{Clock, Store};

pub const HOOK_URL: &str = "http://localhost:9999/webhooks";

pub struct Harness {
    pub store: Store,
    pub clock: Arc<FixedClock>,
    pub dispatcher: Arc<WebhookDispatcher>,
    pub locks: Arc<SubscriptionLocks>,
    pub transport: Arc<RecordingTransport>,
}

impl Harness {
    /// Catalog with `pri_monthly` (500, no trial) and `pri_trial`
    /// (500, 14 day trial), customer `ctm_test_alice` and one active
    /// webhook destination.
    pub async fn new() -> Self {
        let clock = Arc::new(FixedClock::at(start()));
        let store = memory_store_with_clock(clock.clone());

        store.products.set(product()).await.unwrap();
        store.prices.set(monthly_price("500")).await.unwrap();
        store.prices.set(trial_price(14)).await.unwrap();
        store
            .customers
            .set(
                Customer::register(
                    CustomerId::new("ctm_test_alice"),
                    NewCustomer {
                        email: "alice@test.com".to_string(),
                        ..Default::default()
                    },
                    start(),
                )
                .unwrap(),
            )
            .await
            .unwrap();
        store
            .notification_settings
            .set(
                NotificationSetting::register(
                    NotificationSettingId::new("ntfset_test"),
                    NewNotificationSetting {
                        destination: HOOK_URL.to_string(),
                        ..Default::default()
                    },
                    start(),
                )
                .unwrap(),
            )
            .await
            .unwrap();

        let transport = Arc::new(RecordingTransport::new());
        let dispatcher = Arc::new(WebhookDispatcher::new(
            store.clone(),
            WebhookSigner::new(SecretString::new("pdl_test_signing_secret".to_string())),
            transport.clone(),
        ));

        Self {
            store,
            clock,
            dispatcher,
            locks: Arc::new(SubscriptionLocks::new()),
            transport,
        }
    }

    pub fn clock_now(&self) -> Timestamp {
        self.clock.now()
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
