//! UpdateSubscriptionHandler - scheduled changes, item swaps, custom data.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::{SubscriptionLocks, WebhookDispatcher};
use crate::domain::billing::BillingError;
use crate::domain::notification::EventType;
use crate::domain::subscription::{ScheduledChangeAction, Subscription};
use crate::ports::Store;

use super::items::{resolve_items, ItemRequest};

/// Independently optional changes. An empty `items` list leaves the
/// items alone.
#[derive(Debug, Clone, Default)]
pub struct UpdateSubscriptionCommand {
    pub subscription_id: String,
    pub scheduled_change: Option<ScheduledChangeAction>,
    pub items: Option<Vec<ItemRequest>>,
    pub custom_data: Option<BTreeMap<String, String>>,
}

/// Applies an update and always fires `subscription.updated`, even when
/// nothing visible changed.
///
/// Scheduled changes are recorded only; no other operation enacts them.
pub struct UpdateSubscriptionHandler {
    store: Store,
    dispatcher: Arc<WebhookDispatcher>,
    locks: Arc<SubscriptionLocks>,
}

impl UpdateSubscriptionHandler {
    pub fn new(store: Store, dispatcher: Arc<WebhookDispatcher>, locks: Arc<SubscriptionLocks>) -> Self {
        Self {
            store,
            dispatcher,
            locks,
        }
    }

    pub async fn handle(&self, cmd: UpdateSubscriptionCommand) -> Result<Subscription, BillingError> {
        let _guard = self.locks.acquire(&cmd.subscription_id).await;

        let mut subscription = self
            .store
            .subscriptions
            .get(&cmd.subscription_id)
            .await?
            .ok_or_else(|| BillingError::not_found("Subscription", &cmd.subscription_id))?;

        // Resolve first so an unknown price leaves the subscription untouched.
        let replacement = match cmd.items.filter(|items| !items.is_empty()) {
            Some(items) => Some(resolve_items(&self.store, &items).await?),
            None => None,
        };

        let now = self.store.clock.now();

        if let Some(action) = cmd.scheduled_change {
            subscription.schedule(action, now)?;
        }
        if let Some(custom_data) = cmd.custom_data {
            subscription.custom_data = custom_data;
        }
        if let Some(selections) = replacement {
            subscription.replace_items(selections, now);
        }
        subscription.updated_at = now;

        self.store.subscriptions.set(subscription.clone()).await?;
        tracing::info!(
            subscription_id = %subscription.id,
            scheduled_change = ?subscription.scheduled_change.as_ref().map(|c| c.action),
            "Subscription updated"
        );

        self.dispatcher
            .fire(EventType::SubscriptionUpdated, subscription.clone())
            .await;

        Ok(subscription)
    }
}
