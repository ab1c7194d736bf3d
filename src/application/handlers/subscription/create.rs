//! CreateSubscriptionHandler - opens a subscription.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::WebhookDispatcher;
use crate::domain::billing::BillingError;
use crate::domain::foundation::SubscriptionId;
use crate::domain::notification::EventType;
use crate::domain::subscription::{CollectionMode, LifecycleEffect, NewSubscription, Subscription};
use crate::domain::transaction::TransactionStatus;
use crate::ports::{next_id, Store};

use super::effects::EffectRunner;
use super::items::{resolve_items, ItemRequest};

const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Default)]
pub struct CreateSubscriptionCommand {
    pub customer_id: String,
    pub items: Vec<ItemRequest>,
    pub currency_code: Option<String>,
    pub collection_mode: Option<CollectionMode>,
    pub custom_data: Option<BTreeMap<String, String>>,
}

/// Opens a subscription, records its first transaction and fires
/// `subscription.created`.
pub struct CreateSubscriptionHandler {
    store: Store,
    dispatcher: Arc<WebhookDispatcher>,
}

impl CreateSubscriptionHandler {
    pub fn new(store: Store, dispatcher: Arc<WebhookDispatcher>) -> Self {
        Self { store, dispatcher }
    }

    pub async fn handle(&self, cmd: CreateSubscriptionCommand) -> Result<Subscription, BillingError> {
        if cmd.customer_id.is_empty() || cmd.items.is_empty() {
            return Err(BillingError::validation(
                if cmd.customer_id.is_empty() { "customer_id" } else { "items" },
                "customer_id and items are required",
            ));
        }

        let customer = self
            .store
            .customers
            .get(&cmd.customer_id)
            .await?
            .ok_or_else(|| BillingError::validation("customer_id", "Customer not found"))?;

        let items = resolve_items(&self.store, &cmd.items).await?;

        let now = self.store.clock.now();
        let subscription = Subscription::create(
            NewSubscription {
                id: next_id::<SubscriptionId>(self.store.ids.as_ref()),
                customer_id: customer.id,
                currency_code: cmd
                    .currency_code
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                collection_mode: cmd.collection_mode.unwrap_or_default(),
                custom_data: cmd.custom_data.unwrap_or_default(),
                items,
            },
            now,
        )?;

        self.store.subscriptions.set(subscription.clone()).await?;
        tracing::info!(
            subscription_id = %subscription.id,
            customer_id = %subscription.customer_id,
            status = %subscription.status,
            "Subscription created"
        );

        EffectRunner::new(&self.store, &self.dispatcher)
            .run(
                &subscription,
                &[
                    LifecycleEffect::RecordTransaction(TransactionStatus::Completed),
                    LifecycleEffect::NotifySubscription(EventType::SubscriptionCreated),
                ],
                now,
            )
            .await?;

        Ok(subscription)
    }
}
