//! ChargeSubscriptionHandler - ad-hoc, out-of-band billing.

use std::sync::Arc;

use crate::application::{SubscriptionLocks, WebhookDispatcher};
use crate::domain::billing::BillingError;
use crate::domain::foundation::TransactionId;
use crate::domain::notification::EventType;
use crate::domain::subscription::Subscription;
use crate::domain::transaction::{TransactionDraft, TransactionLine};
use crate::ports::{next_id, Store};

use super::items::{resolve_items, ItemRequest};

#[derive(Debug, Clone, Default)]
pub struct ChargeSubscriptionCommand {
    pub subscription_id: String,
    pub items: Vec<ItemRequest>,
}

/// Bills the given items against a subscription and fires
/// `transaction.completed`. The subscription itself is not changed.
pub struct ChargeSubscriptionHandler {
    store: Store,
    dispatcher: Arc<WebhookDispatcher>,
    locks: Arc<SubscriptionLocks>,
}

impl ChargeSubscriptionHandler {
    pub fn new(store: Store, dispatcher: Arc<WebhookDispatcher>, locks: Arc<SubscriptionLocks>) -> Self {
        Self {
            store,
            dispatcher,
            locks,
        }
    }

    /// Returns the unchanged subscription.
    pub async fn handle(&self, cmd: ChargeSubscriptionCommand) -> Result<Subscription, BillingError> {
        let _guard = self.locks.acquire(&cmd.subscription_id).await;

        let subscription = self
            .store
            .subscriptions
            .get(&cmd.subscription_id)
            .await?
            .ok_or_else(|| BillingError::not_found("Subscription", &cmd.subscription_id))?;

        let lines: Vec<TransactionLine> = resolve_items(&self.store, &cmd.items)
            .await?
            .into_iter()
            .map(TransactionLine::from)
            .collect();

        let now = self.store.clock.now();
        let transaction = TransactionDraft::charge(&subscription, lines)
            .build(next_id::<TransactionId>(self.store.ids.as_ref()), now);
        self.store.transactions.set(transaction.clone()).await?;
        tracing::info!(
            transaction_id = %transaction.id,
            subscription_id = %subscription.id,
            total = %transaction.details.totals.total,
            "Subscription charged"
        );

        self.dispatcher
            .fire(EventType::TransactionCompleted, transaction)
            .await;

        Ok(subscription)
    }
}
