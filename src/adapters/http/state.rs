//! Shared application state for the HTTP adapter.

use std::sync::Arc;

use crate::application::handlers::admin::{ResetOptions, ResetStoreHandler, TriggerWebhookHandler};
use crate::application::handlers::catalog::{
    CatalogQueries, CreateCustomerHandler, CreateNotificationSettingHandler, UpdateCustomerHandler,
};
use crate::application::handlers::subscription::{
    ActivateSubscriptionHandler, AdvanceTimeHandler, ChargeSubscriptionHandler,
    CreateSubscriptionHandler, SubscriptionQueries, UpdateSubscriptionHandler,
};
use crate::application::{SubscriptionLocks, WebhookDispatcher};
use crate::ports::Store;

/// Cloned into every request. Handlers are built on demand from it.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub dispatcher: Arc<WebhookDispatcher>,
    pub locks: Arc<SubscriptionLocks>,
    pub reset: ResetOptions,
}

impl AppState {
    pub fn new(store: Store, dispatcher: Arc<WebhookDispatcher>, reset: ResetOptions) -> Self {
        Self {
            store,
            dispatcher,
            locks: Arc::new(SubscriptionLocks::new()),
            reset,
        }
    }

    // Subscriptions

    pub fn subscription_queries(&self) -> SubscriptionQueries {
        SubscriptionQueries::new(self.store.clone())
    }

    pub fn create_subscription_handler(&self) -> CreateSubscriptionHandler {
        CreateSubscriptionHandler::new(self.store.clone(), self.dispatcher.clone())
    }

    pub fn update_subscription_handler(&self) -> UpdateSubscriptionHandler {
        UpdateSubscriptionHandler::new(
            self.store.clone(),
            self.dispatcher.clone(),
            self.locks.clone(),
        )
    }

    pub fn activate_subscription_handler(&self) -> ActivateSubscriptionHandler {
        ActivateSubscriptionHandler::new(
            self.store.clone(),
            self.dispatcher.clone(),
            self.locks.clone(),
        )
    }

    pub fn charge_subscription_handler(&self) -> ChargeSubscriptionHandler {
        ChargeSubscriptionHandler::new(
            self.store.clone(),
            self.dispatcher.clone(),
            self.locks.clone(),
        )
    }

    pub fn advance_time_handler(&self) -> AdvanceTimeHandler {
        AdvanceTimeHandler::new(
            self.store.clone(),
            self.dispatcher.clone(),
            self.locks.clone(),
        )
    }

    // Catalog

    pub fn catalog_queries(&self) -> CatalogQueries {
        CatalogQueries::new(self.store.clone())
    }

    pub fn create_customer_handler(&self) -> CreateCustomerHandler {
        CreateCustomerHandler::new(self.store.clone())
    }

    pub fn update_customer_handler(&self) -> UpdateCustomerHandler {
        UpdateCustomerHandler::new(self.store.clone())
    }

    pub fn create_notification_setting_handler(&self) -> CreateNotificationSettingHandler {
        CreateNotificationSettingHandler::new(self.store.clone())
    }

    // Admin

    pub fn reset_handler(&self) -> ResetStoreHandler {
        ResetStoreHandler::new(self.store.clone(), self.reset.clone())
    }

    pub fn trigger_webhook_handler(&self) -> TriggerWebhookHandler {
        TriggerWebhookHandler::new(self.dispatcher.clone())
    }
}
