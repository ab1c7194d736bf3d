//! Shared path for table-driven lifecycle transitions.

use crate::application::{SubscriptionLocks, WebhookDispatcher};
use crate::domain::billing::BillingError;
use crate::domain::subscription::{Subscription, SubscriptionStatus, TransitionContext, TransitionFn};
use crate::ports::Store;

use super::effects::EffectRunner;

/// Which table to consult and how to name the attempt in a conflict.
pub(super) struct TransitionRequest<'a> {
    pub subscription_id: &'a str,
    pub attempted: &'static str,
    pub table: fn(SubscriptionStatus) -> Option<TransitionFn>,
    pub payment_fails: bool,
}

/// Locks the subscription, applies the transition keyed by its current
/// status, persists it and runs its effects.
///
/// A status without an entry in the table is a conflict and leaves the
/// subscription untouched with no events fired.
pub(super) async fn apply_transition(
    store: &Store,
    dispatcher: &WebhookDispatcher,
    locks: &SubscriptionLocks,
    request: TransitionRequest<'_>,
) -> Result<Subscription, BillingError> {
    let _guard = locks.acquire(request.subscription_id).await;

    let subscription = store
        .subscriptions
        .get(request.subscription_id)
        .await?
        .ok_or_else(|| BillingError::not_found("Subscription", request.subscription_id))?;

    let status = subscription.status;
    let transition_fn = (request.table)(status)
        .ok_or_else(|| BillingError::conflict(status.as_str(), request.attempted))?;

    let now = store.clock.now();
    let ctx = TransitionContext::at(now).failing_payment(request.payment_fails);
    let transition = transition_fn(subscription, &ctx)?;

    store.subscriptions.set(transition.subscription.clone()).await?;
    tracing::info!(
        subscription_id = %transition.subscription.id,
        from = %status,
        to = %transition.subscription.status,
        "Subscription transitioned"
    );

    EffectRunner::new(store, dispatcher)
        .run(&transition.subscription, &transition.effects, now)
        .await?;

    Ok(transition.subscription)
}
