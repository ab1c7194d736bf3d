//! ActivateSubscriptionHandler - ends a trial on request.

use std::sync::Arc;

use crate::application::{SubscriptionLocks, WebhookDispatcher};
use crate::domain::billing::BillingError;
use crate::domain::subscription::{activation_transition, Subscription};
use crate::ports::Store;

use super::transition::{apply_transition, TransitionRequest};

#[derive(Debug, Clone)]
pub struct ActivateSubscriptionCommand {
    pub subscription_id: String,
}

/// Moves a trialing subscription to `active`, bills it and fires
/// `subscription.activated`. Any other status is a conflict.
pub struct ActivateSubscriptionHandler {
    store: Store,
    dispatcher: Arc<WebhookDispatcher>,
    locks: Arc<SubscriptionLocks>,
}

impl ActivateSubscriptionHandler {
    pub fn new(store: Store, dispatcher: Arc<WebhookDispatcher>, locks: Arc<SubscriptionLocks>) -> Self {
        Self {
            store,
            dispatcher,
            locks,
        }
    }

    pub async fn handle(&self, cmd: ActivateSubscriptionCommand) -> Result<Subscription, BillingError> {
        apply_transition(
            &self.store,
            &self.dispatcher,
            &self.locks,
            TransitionRequest {
                subscription_id: &cmd.subscription_id,
                attempted: "activate",
                table: activation_transition,
                payment_fails: false,
            },
        )
        .await
    }
}
