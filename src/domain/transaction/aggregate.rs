//! Transaction records.
//!
//! A transaction is written once per billing event and never mutated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Price, Product};
use crate::domain::foundation::{CustomerId, PriceId, SubscriptionId, Timestamp, TransactionId};
use crate::domain::subscription::CollectionMode;

/// Outcome of a billing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Failed,
}

/// What produced a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionOrigin {
    /// Trial end, renewal or failed renewal.
    SubscriptionRecurring,
    /// One-off charge against a subscription.
    SubscriptionCharge,
    /// Created directly through the API.
    Api,
}

/// A billed line, frozen at billing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionItem {
    pub price_id: PriceId,
    pub quantity: u32,
    pub price: Price,
    pub product: Option<Product>,
}

/// Monetary totals as decimal strings in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTotals {
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub grand_total: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub totals: TransactionTotals,
}

/// An immutable billing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub status: TransactionStatus,
    pub customer_id: CustomerId,
    pub subscription_id: Option<SubscriptionId>,
    pub currency_code: String,
    pub collection_mode: CollectionMode,
    pub origin: TransactionOrigin,
    pub items: Vec<TransactionItem>,
    pub details: TransactionDetails,
    /// Unset for failed transactions.
    pub billed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub custom_data: BTreeMap<String, String>,
}

impl Transaction {
    pub fn is_completed(&self) -> bool {
        self.status == TransactionStatus::Completed
    }
}
