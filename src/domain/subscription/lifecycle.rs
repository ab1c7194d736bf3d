//! Status-keyed lifecycle transitions.
//!
//! Each table maps the current status to the transition that applies, or
//! to `None` when the operation is not allowed from that status. A
//! transition returns the updated subscription plus the side effects the
//! caller must run, in order.

use super::aggregate::Subscription;
use super::status::SubscriptionStatus;
use crate::domain::billing::{BillingError, BillingPeriod};
use crate::domain::foundation::Timestamp;
use crate::domain::notification::EventType;
use crate::domain::transaction::TransactionStatus;

/// Inputs shared by every transition.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext {
    pub now: Timestamp,
    /// Simulates a declined renewal charge.
    pub payment_fails: bool,
}

impl TransitionContext {
    pub fn at(now: Timestamp) -> Self {
        Self {
            now,
            payment_fails: false,
        }
    }

    pub fn failing_payment(mut self, payment_fails: bool) -> Self {
        self.payment_fails = payment_fails;
        self
    }
}

/// Work left for the caller after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEffect {
    /// Bill the subscription's own items with the given outcome.
    RecordTransaction(TransactionStatus),
    /// Fire an event carrying the updated subscription.
    NotifySubscription(EventType),
    /// Fire an event carrying the transaction recorded by this transition.
    NotifyTransaction(EventType),
}

/// Outcome of a transition.
#[derive(Debug, Clone)]
pub struct Transition {
    pub subscription: Subscription,
    pub effects: Vec<LifecycleEffect>,
}

pub type TransitionFn = fn(Subscription, &TransitionContext) -> Result<Transition, BillingError>;

/// Simulated clock tick.
pub fn advance_transition(status: SubscriptionStatus) -> Option<TransitionFn> {
    match status {
        SubscriptionStatus::Trialing => Some(end_trial),
        SubscriptionStatus::Active => Some(renew),
        SubscriptionStatus::PastDue => Some(cancel_unpaid),
        SubscriptionStatus::Paused => Some(resume),
        SubscriptionStatus::Canceled => None,
    }
}

/// Explicit activation of a trial.
pub fn activation_transition(status: SubscriptionStatus) -> Option<TransitionFn> {
    match status {
        SubscriptionStatus::Trialing => Some(activate_trial),
        SubscriptionStatus::Active
        | SubscriptionStatus::PastDue
        | SubscriptionStatus::Paused
        | SubscriptionStatus::Canceled => None,
    }
}

/// Leaves the trial and bills the first paid period from `now`.
fn start_paid_billing(
    subscription: &mut Subscription,
    now: Timestamp,
) -> Result<BillingPeriod, BillingError> {
    subscription.move_to(SubscriptionStatus::Active, now)?;
    subscription.first_billed_at = Some(now);
    let period = subscription.restart_billing(now);
    for item in &mut subscription.items {
        item.trial_dates = None;
        item.next_billed_at = Some(period.ends_at);
    }
    Ok(period)
}

fn activate_trial(
    mut subscription: Subscription,
    ctx: &TransitionContext,
) -> Result<Transition, BillingError> {
    start_paid_billing(&mut subscription, ctx.now)?;

    Ok(Transition {
        subscription,
        effects: vec![
            LifecycleEffect::RecordTransaction(TransactionStatus::Completed),
            LifecycleEffect::NotifySubscription(EventType::SubscriptionActivated),
        ],
    })
}

fn end_trial(
    mut subscription: Subscription,
    ctx: &TransitionContext,
) -> Result<Transition, BillingError> {
    start_paid_billing(&mut subscription, ctx.now)?;
    for item in &mut subscription.items {
        item.previously_billed_at = Some(ctx.now);
    }

    Ok(Transition {
        subscription,
        effects: vec![
            LifecycleEffect::RecordTransaction(TransactionStatus::Completed),
            LifecycleEffect::NotifySubscription(EventType::SubscriptionActivated),
            LifecycleEffect::NotifyTransaction(EventType::TransactionCompleted),
        ],
    })
}

/// Renewal: on success the next period starts where the previous one
/// ended, not at `now`.
fn renew(mut subscription: Subscription, ctx: &TransitionContext) -> Result<Transition, BillingError> {
    if ctx.payment_fails {
        subscription.move_to(SubscriptionStatus::PastDue, ctx.now)?;
        return Ok(Transition {
            subscription,
            effects: vec![
                LifecycleEffect::RecordTransaction(TransactionStatus::Failed),
                LifecycleEffect::NotifySubscription(EventType::SubscriptionPastDue),
                LifecycleEffect::NotifyTransaction(EventType::TransactionPaymentFailed),
            ],
        });
    }

    let previous_end = subscription
        .current_billing_period
        .map(|period| period.ends_at)
        .unwrap_or(ctx.now);

    subscription.move_to(SubscriptionStatus::Active, ctx.now)?;
    let period = subscription.restart_billing(previous_end);
    for item in &mut subscription.items {
        item.previously_billed_at = Some(previous_end);
        item.next_billed_at = Some(period.ends_at);
    }

    Ok(Transition {
        subscription,
        effects: vec![
            LifecycleEffect::RecordTransaction(TransactionStatus::Completed),
            LifecycleEffect::NotifySubscription(EventType::SubscriptionUpdated),
            LifecycleEffect::NotifyTransaction(EventType::TransactionCompleted),
        ],
    })
}

fn cancel_unpaid(
    mut subscription: Subscription,
    ctx: &TransitionContext,
) -> Result<Transition, BillingError> {
    subscription.move_to(SubscriptionStatus::Canceled, ctx.now)?;
    subscription.canceled_at = Some(ctx.now);
    subscription.scheduled_change = None;

    Ok(Transition {
        subscription,
        effects: vec![LifecycleEffect::NotifySubscription(
            EventType::SubscriptionCanceled,
        )],
    })
}

fn resume(mut subscription: Subscription, ctx: &TransitionContext) -> Result<Transition, BillingError> {
    subscription.move_to(SubscriptionStatus::Active, ctx.now)?;
    subscription.paused_at = None;
    subscription.restart_billing(ctx.now);

    Ok(Transition {
        subscription,
        effects: vec![LifecycleEffect::NotifySubscription(
            EventType::SubscriptionUpdated,
        )],
    })
}
