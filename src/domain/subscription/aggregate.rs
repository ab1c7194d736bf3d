//! Subscription aggregate.
//!
//! A subscription is created once, mutated in place by every lifecycle
//! transition and never deleted. Its items always mirror its status.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::status::SubscriptionStatus;
use crate::domain::billing::{BillingCycle, BillingError, BillingPeriod, TrialPeriod};
use crate::domain::catalog::{Price, Product};
use crate::domain::foundation::{CustomerId, StateMachine, SubscriptionId, Timestamp};

/// How payment is collected. Copied onto every generated transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMode {
    #[default]
    Automatic,
    Manual,
}

/// Deferred action recorded against a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduledChangeAction {
    Cancel,
    Pause,
    Resume,
}

/// A recorded, not yet enacted, change of a subscription.
///
/// Nothing in the lifecycle consults this record: it is bookkeeping that
/// clients can read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledChange {
    pub action: ScheduledChangeAction,
    pub effective_at: Timestamp,
    pub resume_at: Option<Timestamp>,
}

/// A line of a subscription with a frozen copy of its price and product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionItem {
    pub status: SubscriptionStatus,
    pub quantity: u32,
    pub recurring: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub previously_billed_at: Option<Timestamp>,
    pub next_billed_at: Option<Timestamp>,
    pub trial_dates: Option<BillingPeriod>,
    pub price: Price,
    pub product: Option<Product>,
}

/// A resolved price chosen for a subscription or a charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSelection {
    pub price: Price,
    pub product: Option<Product>,
    pub quantity: u32,
}

impl ItemSelection {
    /// A quantity of zero means one.
    pub fn new(price: Price, product: Option<Product>, quantity: u32) -> Self {
        Self {
            price,
            product,
            quantity: quantity.max(1),
        }
    }
}

impl SubscriptionItem {
    fn from_selection(selection: ItemSelection, status: SubscriptionStatus, now: Timestamp) -> Self {
        Self {
            status,
            quantity: selection.quantity,
            recurring: true,
            created_at: now,
            updated_at: now,
            previously_billed_at: None,
            next_billed_at: None,
            trial_dates: None,
            price: selection.price,
            product: selection.product,
        }
    }
}

/// Everything needed to open a subscription.
#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub id: SubscriptionId,
    pub customer_id: CustomerId,
    pub currency_code: String,
    pub collection_mode: CollectionMode,
    pub custom_data: BTreeMap<String, String>,
    pub items: Vec<ItemSelection>,
}

/// How a price starts its life on a new subscription.
enum Enrollment {
    Trial(TrialPeriod),
    Immediate,
}

impl Enrollment {
    fn for_price(price: &Price) -> Self {
        match &price.trial_period {
            Some(trial) => Enrollment::Trial(trial.clone()),
            None => Enrollment::Immediate,
        }
    }
}

/// A customer's recurring purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub status: SubscriptionStatus,
    pub customer_id: CustomerId,
    pub address_id: Option<String>,
    pub business_id: Option<String>,
    pub currency_code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub started_at: Option<Timestamp>,
    pub first_billed_at: Option<Timestamp>,
    pub next_billed_at: Option<Timestamp>,
    pub paused_at: Option<Timestamp>,
    pub canceled_at: Option<Timestamp>,
    pub collection_mode: CollectionMode,
    pub billing_details: Option<serde_json::Value>,
    pub current_billing_period: Option<BillingPeriod>,
    pub billing_cycle: BillingCycle,
    pub scheduled_change: Option<ScheduledChange>,
    pub items: Vec<SubscriptionItem>,
    #[serde(default)]
    pub custom_data: BTreeMap<String, String>,
    pub management_urls: Option<serde_json::Value>,
    pub discount: Option<serde_json::Value>,
}

impl Subscription {
    /// Opens a subscription.
    ///
    /// Prices with a trial put the subscription in `trialing` with the trial
    /// window as its current period. Any price without a trial makes it
    /// `active` immediately, billed from `now`. The billing cycle comes from
    /// the last price that declares one (month×1 if none does).
    pub fn create(new: NewSubscription, now: Timestamp) -> Result<Self, BillingError> {
        if new.items.is_empty() {
            return Err(BillingError::validation(
                "items",
                "customer_id and items are required",
            ));
        }

        let mut subscription = Subscription {
            id: new.id,
            status: SubscriptionStatus::Trialing,
            customer_id: new.customer_id,
            address_id: None,
            business_id: None,
            currency_code: new.currency_code,
            created_at: now,
            updated_at: now,
            started_at: Some(now),
            first_billed_at: None,
            next_billed_at: None,
            paused_at: None,
            canceled_at: None,
            collection_mode: new.collection_mode,
            billing_details: None,
            current_billing_period: None,
            billing_cycle: BillingCycle::monthly(),
            scheduled_change: None,
            items: Vec::with_capacity(new.items.len()),
            custom_data: new.custom_data,
            management_urls: None,
            discount: None,
        };

        for selection in new.items {
            if let Some(cycle) = &selection.price.billing_cycle {
                subscription.billing_cycle = cycle.clone();
            }

            let enrollment = Enrollment::for_price(&selection.price);
            let mut item =
                SubscriptionItem::from_selection(selection, SubscriptionStatus::Trialing, now);

            match enrollment {
                Enrollment::Trial(trial) => {
                    let window = trial.period_from(now);
                    item.trial_dates = Some(window);
                    item.next_billed_at = Some(window.ends_at);
                    subscription.next_billed_at = Some(window.ends_at);
                    subscription.current_billing_period = Some(window);
                }
                Enrollment::Immediate => {
                    subscription.status = SubscriptionStatus::Active;
                    subscription.first_billed_at = Some(now);
                    let period = subscription.restart_billing(now);
                    item.next_billed_at = Some(period.ends_at);
                }
            }

            subscription.items.push(item);
        }

        subscription.mirror_items(now);
        Ok(subscription)
    }

    /// Starts a new period of one billing cycle at `from`.
    pub fn restart_billing(&mut self, from: Timestamp) -> BillingPeriod {
        let period = self.billing_cycle.period_from(from);
        self.current_billing_period = Some(period);
        self.next_billed_at = Some(period.ends_at);
        period
    }

    /// Moves to `target` if the state machine allows it; items follow.
    pub fn move_to(&mut self, target: SubscriptionStatus, now: Timestamp) -> Result<(), BillingError> {
        self.status = self.status.transition_to(target)?;
        self.mirror_items(now);
        self.updated_at = now;
        Ok(())
    }

    /// Records (`cancel`, `pause`) or clears (`resume`) a scheduled change.
    ///
    /// Cancel and pause take effect at the end of the current period, or
    /// `now` when there is none. Resume also reactivates a paused
    /// subscription on the spot, without touching its billing period.
    pub fn schedule(&mut self, action: ScheduledChangeAction, now: Timestamp) -> Result<(), BillingError> {
        match action {
            ScheduledChangeAction::Cancel | ScheduledChangeAction::Pause => {
                let effective_at = self
                    .current_billing_period
                    .map(|period| period.ends_at)
                    .unwrap_or(now);
                self.scheduled_change = Some(ScheduledChange {
                    action,
                    effective_at,
                    resume_at: None,
                });
            }
            ScheduledChangeAction::Resume => {
                self.scheduled_change = None;
                if self.status == SubscriptionStatus::Paused {
                    self.move_to(SubscriptionStatus::Active, now)?;
                    self.paused_at = None;
                }
            }
        }
        Ok(())
    }

    /// Swaps the whole item list. New items take the current status; no
    /// proration happens.
    pub fn replace_items(&mut self, selections: Vec<ItemSelection>, now: Timestamp) {
        let status = self.status;
        self.items = selections
            .into_iter()
            .map(|selection| SubscriptionItem::from_selection(selection, status, now))
            .collect();
    }

    fn mirror_items(&mut self, now: Timestamp) {
        let status = self.status;
        for item in &mut self.items {
            item.status = status;
            item.updated_at = now;
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::billing::{BillingInterval, Money};
    use crate::domain::foundation::{PriceId, ProductId};

    pub fn product() -> Product {
        Product::new(ProductId::new("pro_base"), "Base Plan", start())
    }

    pub fn start() -> Timestamp {
        Timestamp::from_unix_secs(1_705_276_800).unwrap() // 2024-01-15T00:00:00Z
    }

    pub fn monthly_price(amount: &str) -> Price {
        Price::new(
            PriceId::new("pri_monthly"),
            ProductId::new("pro_base"),
            "Monthly",
            Money::new(amount, "USD"),
            start(),
        )
        .with_billing_cycle(BillingCycle::monthly())
    }

    pub fn trial_price(days: u32) -> Price {
        Price {
            id: PriceId::new("pri_trial"),
            ..monthly_price("500")
        }
        .with_trial_period(BillingCycle::new(BillingInterval::Day, days))
    }

    pub fn new_subscription(prices: Vec<Price>) -> NewSubscription {
        NewSubscription {
            id: SubscriptionId::new("sub_00000001"),
            customer_id: CustomerId::new("ctm_test_alice"),
            currency_code: "USD".to_string(),
            collection_mode: CollectionMode::Automatic,
            custom_data: BTreeMap::new(),
            items: prices
                .into_iter()
                .map(|price| ItemSelection::new(price, Some(product()), 1))
                .collect(),
        }
    }

    pub fn trialing() -> Subscription {
        Subscription::create(new_subscription(vec![trial_price(14)]), start()).unwrap()
    }

    pub fn active() -> Subscription {
        Subscription::create(new_subscription(vec![monthly_price("500")]), start()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::domain::billing::{add_period, BillingInterval};

    #[test]
    fn create_requires_items() {
        let result = Subscription::create(new_subscription(vec![]), start());
        assert!(matches!(result, Err(BillingError::Validation { .. })));
    }

    #[test]
    fn create_with_trial_starts_trialing_over_trial_window() {
        let sub = trialing();
        let trial_end = add_period(start(), &BillingInterval::Day, 14);

        assert_eq!(sub.status, SubscriptionStatus::Trialing);
        assert_eq!(
            sub.current_billing_period,
            Some(BillingPeriod::new(start(), trial_end))
        );
        assert_eq!(sub.next_billed_at, Some(trial_end));
        assert_eq!(sub.first_billed_at, None);
        assert_eq!(sub.started_at, Some(start()));

        let item = &sub.items[0];
        assert_eq!(item.status, SubscriptionStatus::Trialing);
        assert_eq!(item.trial_dates, Some(BillingPeriod::new(start(), trial_end)));
        assert_eq!(item.next_billed_at, Some(trial_end));
    }

    #[test]
    fn create_without_trial_is_active_and_billed() {
        let sub = active();
        let period_end = add_period(start(), &BillingInterval::Month, 1);

        assert_eq!(sub.status, SubscriptionStatus::Active);
        assert_eq!(sub.first_billed_at, Some(start()));
        assert_eq!(
            sub.current_billing_period,
            Some(BillingPeriod::new(start(), period_end))
        );
        assert_eq!(sub.items[0].status, SubscriptionStatus::Active);
        assert_eq!(sub.items[0].trial_dates, None);
    }

    #[test]
    fn last_declared_cycle_wins() {
        let weekly = Price {
            billing_cycle: Some(BillingCycle::new(BillingInterval::Week, 1)),
            ..monthly_price("100")
        };
        let yearly = Price {
            billing_cycle: Some(BillingCycle::new(BillingInterval::Year, 1)),
            ..monthly_price("100")
        };

        let sub = Subscription::create(new_subscription(vec![weekly, yearly]), start()).unwrap();
        assert_eq!(sub.billing_cycle, BillingCycle::new(BillingInterval::Year, 1));
    }

    #[test]
    fn cycle_defaults_to_monthly_when_no_price_declares_one() {
        let bare = Price {
            billing_cycle: None,
            ..monthly_price("100")
        };
        let sub = Subscription::create(new_subscription(vec![bare]), start()).unwrap();

        assert_eq!(sub.billing_cycle, BillingCycle::monthly());
        assert_eq!(
            sub.current_billing_period.map(|p| p.ends_at),
            Some(add_period(start(), &BillingInterval::Month, 1))
        );
    }

    #[test]
    fn mixed_trial_and_paid_items_mirror_the_parent() {
        let sub = Subscription::create(
            new_subscription(vec![monthly_price("100"), trial_price(7)]),
            start(),
        )
        .unwrap();

        assert_eq!(sub.status, SubscriptionStatus::Active);
        assert!(sub.items.iter().all(|i| i.status == SubscriptionStatus::Active));
    }

    #[test]
    fn zero_quantity_means_one() {
        let selection = ItemSelection::new(monthly_price("100"), None, 0);
        assert_eq!(selection.quantity, 1);
    }

    #[test]
    fn move_to_rejects_illegal_transition() {
        let mut sub = trialing();
        let before = sub.clone();

        let result = sub.move_to(SubscriptionStatus::PastDue, start());
        assert!(matches!(result, Err(BillingError::Conflict { .. })));
        assert_eq!(sub, before);
    }

    #[test]
    fn move_to_updates_items() {
        let mut sub = active();
        let later = start().plus_secs(30);
        sub.move_to(SubscriptionStatus::PastDue, later).unwrap();

        assert_eq!(sub.updated_at, later);
        assert!(sub
            .items
            .iter()
            .all(|i| i.status == SubscriptionStatus::PastDue && i.updated_at == later));
    }

    #[test]
    fn cancel_is_scheduled_for_period_end() {
        let mut sub = active();
        let period_end = sub.current_billing_period.unwrap().ends_at;

        sub.schedule(ScheduledChangeAction::Cancel, start()).unwrap();

        assert_eq!(sub.status, SubscriptionStatus::Active);
        assert_eq!(
            sub.scheduled_change,
            Some(ScheduledChange {
                action: ScheduledChangeAction::Cancel,
                effective_at: period_end,
                resume_at: None,
            })
        );
    }

    #[test]
    fn pause_without_period_is_effective_now() {
        let mut sub = active();
        sub.current_billing_period = None;
        let now = start().plus_secs(5);

        sub.schedule(ScheduledChangeAction::Pause, now).unwrap();
        assert_eq!(sub.scheduled_change.map(|c| c.effective_at), Some(now));
    }

    #[test]
    fn resume_clears_change_and_reactivates_paused() {
        let mut sub = active();
        sub.status = SubscriptionStatus::Paused;
        sub.paused_at = Some(start());
        sub.scheduled_change = Some(ScheduledChange {
            action: ScheduledChangeAction::Pause,
            effective_at: start(),
            resume_at: None,
        });
        let period = sub.current_billing_period;

        sub.schedule(ScheduledChangeAction::Resume, start()).unwrap();

        assert_eq!(sub.status, SubscriptionStatus::Active);
        assert_eq!(sub.paused_at, None);
        assert_eq!(sub.scheduled_change, None);
        assert_eq!(sub.current_billing_period, period);
    }

    #[test]
    fn replace_items_uses_current_status() {
        let mut sub = trialing();
        let later = start().plus_secs(60);
        sub.replace_items(
            vec![ItemSelection::new(monthly_price("900"), None, 3)],
            later,
        );

        assert_eq!(sub.items.len(), 1);
        assert_eq!(sub.items[0].status, SubscriptionStatus::Trialing);
        assert_eq!(sub.items[0].quantity, 3);
        assert_eq!(sub.items[0].created_at, later);
        assert_eq!(sub.items[0].trial_dates, None);
    }

    #[test]
    fn serializes_nullable_fields_explicitly() {
        let json = serde_json::to_value(trialing()).unwrap();
        assert_eq!(json["status"], "trialing");
        assert!(json["scheduled_change"].is_null());
        assert!(json["first_billed_at"].is_null());
        assert!(json["discount"].is_null());
        assert_eq!(json["collection_mode"], "automatic");
        assert_eq!(json["billing_cycle"]["interval"], "month");
    }
}
