//! Subscription status state machine.

use std::fmt;

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Introductory period before the first charge.
    Trialing,

    /// Billing normally.
    Active,

    /// The last renewal charge failed.
    PastDue,

    /// Billing suspended.
    Paused,

    /// Ended. Cancellation is a status, never a removal.
    Canceled,
}

impl SubscriptionStatus {
    /// Wire name, as used in JSON and the `status` list filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Trialing => "trialing",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Paused => "paused",
            SubscriptionStatus::Canceled => "canceled",
        }
    }

    /// Inverse of [`as_str`](Self::as_str).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "trialing" => Some(SubscriptionStatus::Trialing),
            "active" => Some(SubscriptionStatus::Active),
            "past_due" => Some(SubscriptionStatus::PastDue),
            "paused" => Some(SubscriptionStatus::Paused),
            "canceled" => Some(SubscriptionStatus::Canceled),
            _ => None,
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for SubscriptionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubscriptionStatus::*;
        matches!(
            (self, target),
            // Trial ends (clock tick or explicit activation)
            (Trialing, Active)
            // Renewal succeeds or fails
                | (Active, Active)
                | (Active, PastDue)
            // Unpaid subscriptions are canceled on the next tick
                | (PastDue, Canceled)
            // Resume
                | (Paused, Active)
        )
    }
}
