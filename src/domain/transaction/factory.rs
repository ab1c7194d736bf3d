//! Transaction factory.
//!
//! Builds transaction records with computed totals from (price snapshot,
//! quantity) lines. There is no tax engine and no discounting: `tax` is
//! always `"0"` and `subtotal = total = grand_total`. Currency comes from
//! the subscription, never from the individual prices.

use std::collections::BTreeMap;

use super::aggregate::{
    Transaction, TransactionDetails, TransactionItem, TransactionOrigin, TransactionStatus,
    TransactionTotals,
};
use crate::domain::billing::MinorUnits;
use crate::domain::catalog::{Price, Product};
use crate::domain::foundation::{CustomerId, SubscriptionId, Timestamp, TransactionId};
use crate::domain::subscription::{CollectionMode, ItemSelection, Subscription, SubscriptionItem};

/// One billed line before it is frozen into a transaction item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionLine {
    pub price: Price,
    pub product: Option<Product>,
    pub quantity: u32,
}

impl TransactionLine {
    /// Unit amount × quantity.
    pub fn amount(&self) -> MinorUnits {
        self.price.unit_amount().times(self.quantity)
    }

    fn into_item(self) -> TransactionItem {
        TransactionItem {
            price_id: self.price.id.clone(),
            quantity: self.quantity,
            price: self.price,
            product: self.product,
        }
    }
}

impl From<&SubscriptionItem> for TransactionLine {
    fn from(item: &SubscriptionItem) -> Self {
        Self {
            price: item.price.clone(),
            product: item.product.clone(),
            quantity: item.quantity,
        }
    }
}

impl From<ItemSelection> for TransactionLine {
    fn from(selection: ItemSelection) -> Self {
        Self {
            price: selection.price,
            product: selection.product,
            quantity: selection.quantity,
        }
    }
}

/// Sums the lines into totals in `currency_code`.
pub fn compute_totals(lines: &[TransactionLine], currency_code: &str) -> TransactionTotals {
    let total: MinorUnits = lines.iter().map(TransactionLine::amount).sum();
    let total = total.to_string();

    TransactionTotals {
        subtotal: total.clone(),
        tax: "0".to_string(),
        total: total.clone(),
        grand_total: total,
        currency_code: currency_code.to_string(),
    }
}

/// Everything needed to build a transaction except its id and time.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub customer_id: CustomerId,
    pub subscription_id: Option<SubscriptionId>,
    pub currency_code: String,
    pub collection_mode: CollectionMode,
    pub origin: TransactionOrigin,
    pub status: TransactionStatus,
    pub lines: Vec<TransactionLine>,
}

impl TransactionDraft {
    /// Bills a subscription's own items.
    pub fn recurring(subscription: &Subscription, status: TransactionStatus) -> Self {
        Self::against(
            subscription,
            TransactionOrigin::SubscriptionRecurring,
            status,
            subscription.items.iter().map(TransactionLine::from).collect(),
        )
    }

    /// Bills ad-hoc lines against a subscription, independent of its items.
    pub fn charge(subscription: &Subscription, lines: Vec<TransactionLine>) -> Self {
        Self::against(
            subscription,
            TransactionOrigin::SubscriptionCharge,
            TransactionStatus::Completed,
            lines,
        )
    }

    fn against(
        subscription: &Subscription,
        origin: TransactionOrigin,
        status: TransactionStatus,
        lines: Vec<TransactionLine>,
    ) -> Self {
        Self {
            customer_id: subscription.customer_id.clone(),
            subscription_id: Some(subscription.id.clone()),
            currency_code: subscription.currency_code.clone(),
            collection_mode: subscription.collection_mode,
            origin,
            status,
            lines,
        }
    }

    /// Freezes the draft. Only completed transactions get `billed_at`.
    pub fn build(self, id: TransactionId, now: Timestamp) -> Transaction {
        let totals = compute_totals(&self.lines, &self.currency_code);
        let billed_at = match self.status {
            TransactionStatus::Completed => Some(now),
            TransactionStatus::Failed => None,
        };

        Transaction {
            id,
            status: self.status,
            customer_id: self.customer_id,
            subscription_id: self.subscription_id,
            currency_code: self.currency_code,
            collection_mode: self.collection_mode,
            origin: self.origin,
            items: self.lines.into_iter().map(TransactionLine::into_item).collect(),
            details: TransactionDetails { totals },
            billed_at,
            created_at: now,
            updated_at: now,
            custom_data: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subscription::fixtures::{active, monthly_price, product, start};

    fn line(amount: &str, quantity: u32) -> TransactionLine {
        TransactionLine {
            price: monthly_price(amount),
            product: Some(product()),
            quantity,
        }
    }

    #[test]
    fn totals_multiply_and_sum() {
        let totals = compute_totals(&[line("500", 2), line("250", 1)], "EUR");

        assert_eq!(totals.subtotal, "1250");
        assert_eq!(totals.total, "1250");
        assert_eq!(totals.grand_total, "1250");
        assert_eq!(totals.tax, "0");
        assert_eq!(totals.currency_code, "EUR");
    }

    #[test]
    fn totals_tolerate_formatted_amounts() {
        let totals = compute_totals(&[line("1,000", 1), line("4.99", 1)], "USD");
        assert_eq!(totals.total, "1499");
    }

    #[test]
    fn empty_lines_total_zero() {
        let totals = compute_totals(&[], "USD");
        assert_eq!(totals.total, "0");
        assert_eq!(totals.tax, "0");
    }

    #[test]
    fn recurring_bills_subscription_items() {
        let mut subscription = active();
        subscription.currency_code = "GBP".to_string();
        subscription.items[0].quantity = 3;

        let txn = TransactionDraft::recurring(&subscription, TransactionStatus::Completed)
            .build(TransactionId::new("txn_1"), start());

        assert_eq!(txn.origin, TransactionOrigin::SubscriptionRecurring);
        assert_eq!(txn.subscription_id, Some(subscription.id.clone()));
        assert_eq!(txn.customer_id, subscription.customer_id);
        assert_eq!(txn.currency_code, "GBP");
        assert_eq!(txn.details.totals.total, "1500");
        assert_eq!(txn.details.totals.currency_code, "GBP");
        assert_eq!(txn.items.len(), 1);
        assert_eq!(txn.items[0].price_id, subscription.items[0].price.id);
        assert_eq!(txn.billed_at, Some(start()));
    }

    #[test]
    fn failed_transactions_are_not_billed() {
        let txn = TransactionDraft::recurring(&active(), TransactionStatus::Failed)
            .build(TransactionId::new("txn_2"), start());

        assert_eq!(txn.status, TransactionStatus::Failed);
        assert_eq!(txn.billed_at, None);
        assert_eq!(txn.details.totals.total, "500");
    }

    #[test]
    fn charge_ignores_subscription_items() {
        let subscription = active();
        let txn = TransactionDraft::charge(&subscription, vec![line("7500", 1)])
            .build(TransactionId::new("txn_3"), start());

        assert_eq!(txn.origin, TransactionOrigin::SubscriptionCharge);
        assert_eq!(txn.status, TransactionStatus::Completed);
        assert_eq!(txn.details.totals.total, "7500");
        assert_eq!(txn.collection_mode, subscription.collection_mode);
    }

    #[test]
    fn serializes_with_api_field_names() {
        let txn = TransactionDraft::recurring(&active(), TransactionStatus::Failed)
            .build(TransactionId::new("txn_4"), start());
        let json = serde_json::to_value(&txn).unwrap();

        assert_eq!(json["status"], "failed");
        assert_eq!(json["origin"], "subscription_recurring");
        assert!(json["billed_at"].is_null());
        assert_eq!(json["details"]["totals"]["grand_total"], "500");
        assert_eq!(json["items"][0]["price_id"], "pri_monthly");
    }
}
