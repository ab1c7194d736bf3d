//! AdvanceTimeHandler - the simulated clock tick.

use std::sync::Arc;

use crate::application::{SubscriptionLocks, WebhookDispatcher};
use crate::domain::billing::BillingError;
use crate::domain::subscription::{advance_transition, Subscription};
use crate::ports::Store;

use super::transition::{apply_transition, TransitionRequest};

#[derive(Debug, Clone)]
pub struct AdvanceTimeCommand {
    pub subscription_id: String,
    /// Simulates a declined renewal for active subscriptions.
    pub payment_fails: bool,
}

/// Moves a subscription to its next lifecycle stage:
///
/// | from | to |
/// |------|----|
/// | trialing | active (first bill) |
/// | active | active (renewal) or past_due when the payment fails |
/// | past_due | canceled |
/// | paused | active |
///
/// Canceled subscriptions cannot advance.
pub struct AdvanceTimeHandler {
    store: Store,
    dispatcher: Arc<WebhookDispatcher>,
    locks: Arc<SubscriptionLocks>,
}

impl AdvanceTimeHandler {
    pub fn new(store: Store, dispatcher: Arc<WebhookDispatcher>, locks: Arc<SubscriptionLocks>) -> Self {
        Self {
            store,
            dispatcher,
            locks,
        }
    }

    pub async fn handle(&self, cmd: AdvanceTimeCommand) -> Result<Subscription, BillingError> {
        apply_transition(
            &self.store,
            &self.dispatcher,
            &self.locks,
            TransitionRequest {
                subscription_id: &cmd.subscription_id,
                attempted: "advance",
                table: advance_transition,
                payment_fails: cmd.payment_fails,
            },
        )
        .await
    }
}
