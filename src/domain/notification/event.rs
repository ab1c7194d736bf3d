//! Webhook events.
//!
//! Events are append-only: once logged they are never altered.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, Timestamp};
use crate::domain::subscription::Subscription;
use crate::domain::transaction::Transaction;

/// Event type name, e.g. `subscription.activated`.
///
/// The well-known types get their own variants; anything else (manual
/// triggers) is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    SubscriptionCreated,
    SubscriptionUpdated,
    SubscriptionActivated,
    SubscriptionCanceled,
    SubscriptionPastDue,
    TransactionCompleted,
    TransactionPaymentFailed,
    Custom(String),
}

impl EventType {
    /// The seven event types every default destination subscribes to.
    pub fn standard() -> Vec<EventType> {
        vec![
            EventType::SubscriptionCreated,
            EventType::SubscriptionUpdated,
            EventType::SubscriptionActivated,
            EventType::SubscriptionCanceled,
            EventType::SubscriptionPastDue,
            EventType::TransactionCompleted,
            EventType::TransactionPaymentFailed,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventType::SubscriptionCreated => "subscription.created",
            EventType::SubscriptionUpdated => "subscription.updated",
            EventType::SubscriptionActivated => "subscription.activated",
            EventType::SubscriptionCanceled => "subscription.canceled",
            EventType::SubscriptionPastDue => "subscription.past_due",
            EventType::TransactionCompleted => "transaction.completed",
            EventType::TransactionPaymentFailed => "transaction.payment_failed",
            EventType::Custom(name) => name,
        }
    }
}

impl From<String> for EventType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "subscription.created" => EventType::SubscriptionCreated,
            "subscription.updated" => EventType::SubscriptionUpdated,
            "subscription.activated" => EventType::SubscriptionActivated,
            "subscription.canceled" => EventType::SubscriptionCanceled,
            "subscription.past_due" => EventType::SubscriptionPastDue,
            "transaction.completed" => EventType::TransactionCompleted,
            "transaction.payment_failed" => EventType::TransactionPaymentFailed,
            _ => EventType::Custom(name),
        }
    }
}

impl From<&str> for EventType {
    fn from(name: &str) -> Self {
        EventType::from(name.to_string())
    }
}

impl From<EventType> for String {
    fn from(event_type: EventType) -> Self {
        event_type.as_str().to_string()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot carried by an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventData {
    Subscription(Box<Subscription>),
    Transaction(Box<Transaction>),
    Custom(serde_json::Value),
}

impl From<Subscription> for EventData {
    fn from(subscription: Subscription) -> Self {
        EventData::Subscription(Box::new(subscription))
    }
}

impl From<Transaction> for EventData {
    fn from(transaction: Transaction) -> Self {
        EventData::Transaction(Box::new(transaction))
    }
}

impl From<serde_json::Value> for EventData {
    fn from(value: serde_json::Value) -> Self {
        EventData::Custom(value)
    }
}

/// A logged and delivered notification. This is the exact webhook body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: EventId,
    pub event_type: EventType,
    pub occurred_at: Timestamp,
    pub data: EventData,
}

impl Event {
    pub fn new(
        event_id: EventId,
        event_type: EventType,
        occurred_at: Timestamp,
        data: EventData,
    ) -> Self {
        Self {
            event_id,
            event_type,
            occurred_at,
            data,
        }
    }
}
