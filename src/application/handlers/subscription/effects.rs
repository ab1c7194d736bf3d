//! Runs the side effects a lifecycle transition asks for.

use crate::application::WebhookDispatcher;
use crate::domain::billing::BillingError;
use crate::domain::foundation::{Timestamp, TransactionId};
use crate::domain::subscription::{LifecycleEffect, Subscription};
use crate::domain::transaction::{Transaction, TransactionDraft};
use crate::ports::{next_id, Store};

/// Interprets [`LifecycleEffect`]s in order against the store and the
/// dispatcher.
pub struct EffectRunner<'a> {
    store: &'a Store,
    dispatcher: &'a WebhookDispatcher,
}

impl<'a> EffectRunner<'a> {
    pub fn new(store: &'a Store, dispatcher: &'a WebhookDispatcher) -> Self {
        Self { store, dispatcher }
    }

    /// Returns the transactions recorded along the way.
    ///
    /// `NotifyTransaction` carries the transaction recorded most recently
    /// by this same run.
    pub async fn run(
        &self,
        subscription: &Subscription,
        effects: &[LifecycleEffect],
        now: Timestamp,
    ) -> Result<Vec<Transaction>, BillingError> {
        let mut recorded: Vec<Transaction> = Vec::new();

        for effect in effects {
            match effect {
                LifecycleEffect::RecordTransaction(status) => {
                    let transaction = TransactionDraft::recurring(subscription, *status)
                        .build(next_id::<TransactionId>(self.store.ids.as_ref()), now);
                    self.store.transactions.set(transaction.clone()).await?;
                    tracing::debug!(
                        transaction_id = %transaction.id,
                        subscription_id = %subscription.id,
                        total = %transaction.details.totals.total,
                        "Transaction recorded"
                    );
                    recorded.push(transaction);
                }
                LifecycleEffect::NotifySubscription(event_type) => {
                    self.dispatcher
                        .fire(event_type.clone(), subscription.clone())
                        .await;
                }
                LifecycleEffect::NotifyTransaction(event_type) => match recorded.last() {
                    Some(transaction) => {
                        self.dispatcher
                            .fire(event_type.clone(), transaction.clone())
                            .await;
                    }
                    None => tracing::warn!(
                        subscription_id = %subscription.id,
                        event_type = %event_type,
                        "No transaction recorded to notify about"
                    ),
                },
            }
        }

        Ok(recorded)
    }
}
