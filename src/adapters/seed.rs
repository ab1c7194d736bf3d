//! Default seed data: one product, one trial price, two customers and a
//! trialing subscription for Alice.
//!
//! Seeding writes straight to the store and fires no events.

use std::collections::BTreeMap;

use crate::domain::billing::{BillingCycle, BillingError, BillingInterval, BillingPeriod, Money};
use crate::domain::catalog::{Customer, NewCustomer, Price, Product};
use crate::domain::foundation::{CustomerId, PriceId, ProductId, SubscriptionId, Timestamp};
use crate::domain::subscription::{CollectionMode, ItemSelection, NewSubscription, Subscription};
use crate::ports::Store;

pub const SEED_PRODUCT_ID: &str = "prod_yieldly_base";
pub const SEED_PRICE_ID: &str = "pri_yieldly_monthly";
pub const SEED_ALICE_ID: &str = "ctm_test_alice";
pub const SEED_BOB_ID: &str = "ctm_test_bob";
pub const SEED_SUBSCRIPTION_ID: &str = "sub_test_alice";

/// Length of the seeded subscription's trial window.
const SEED_TRIAL_DAYS: i64 = 90;

/// Loads the seed records, overwriting any with the same ids.
pub async fn load(store: &Store, now: Timestamp) -> Result<(), BillingError> {
    let product = Product::new(ProductId::new(SEED_PRODUCT_ID), "Yieldly Base Plan", now)
        .with_description("Base subscription plan for Yieldly");

    let mut price = Price::new(
        PriceId::new(SEED_PRICE_ID),
        product.id.clone(),
        "$5.00/month with 3-month trial",
        Money::new("500", "USD"),
        now,
    )
    .with_billing_cycle(BillingCycle::monthly())
    .with_trial_period(BillingCycle::new(BillingInterval::Month, 3));
    price.name = Some("Monthly".to_string());

    let alice = customer(SEED_ALICE_ID, "Alice", "alice@test.com", now)?;
    let bob = customer(SEED_BOB_ID, "Bob", "bob@test.com", now)?;

    let subscription = alice_subscription(&alice, &price, &product, now)?;

    store.products.set(product).await?;
    store.prices.set(price).await?;
    store.customers.set(alice).await?;
    store.customers.set(bob).await?;
    store.subscriptions.set(subscription).await?;

    tracing::debug!("Seed data loaded");
    Ok(())
}

fn customer(id: &str, name: &str, email: &str, now: Timestamp) -> Result<Customer, BillingError> {
    Customer::register(
        CustomerId::new(id),
        NewCustomer {
            email: email.to_string(),
            name: Some(name.to_string()),
            ..Default::default()
        },
        now,
    )
}

fn alice_subscription(
    alice: &Customer,
    price: &Price,
    product: &Product,
    now: Timestamp,
) -> Result<Subscription, BillingError> {
    let mut subscription = Subscription::create(
        NewSubscription {
            id: SubscriptionId::new(SEED_SUBSCRIPTION_ID),
            customer_id: alice.id.clone(),
            currency_code: "USD".to_string(),
            collection_mode: CollectionMode::Automatic,
            custom_data: BTreeMap::new(),
            items: vec![ItemSelection::new(price.clone(), Some(product.clone()), 1)],
        },
        now,
    )?;

    // Fixed-length window rather than the price's calendar trial.
    let window = BillingPeriod::new(now, now.add_days(SEED_TRIAL_DAYS));
    subscription.current_billing_period = Some(window);
    subscription.next_billed_at = Some(window.ends_at);
    for item in &mut subscription.items {
        item.trial_dates = Some(window);
        item.next_billed_at = Some(window.ends_at);
    }
    Ok(subscription)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::memory_store;
    use crate::domain::subscription::SubscriptionStatus;

    #[tokio::test]
    async fn loads_catalog_and_customers() {
        let store = memory_store();
        load(&store, Timestamp::now()).await.unwrap();

        assert_eq!(store.products.list().await.unwrap().len(), 1);
        let price = store.prices.get(SEED_PRICE_ID).await.unwrap().unwrap();
        assert_eq!(price.unit_price.amount, "500");
        assert!(price.has_trial());

        let customers = store.customers.list().await.unwrap();
        let ids: Vec<&str> = customers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![SEED_ALICE_ID, SEED_BOB_ID]);
    }

    #[tokio::test]
    async fn alice_is_trialing_for_ninety_days() {
        let store = memory_store();
        let now = Timestamp::now();
        load(&store, now).await.unwrap();

        let sub = store
            .subscriptions
            .get(SEED_SUBSCRIPTION_ID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(sub.status, SubscriptionStatus::Trialing);
        let period = sub.current_billing_period.unwrap();
        assert_eq!(period.starts_at, now);
        assert_eq!(period.ends_at, now.add_days(90));
        assert_eq!(sub.items[0].trial_dates, Some(period));
        assert!(sub.first_billed_at.is_none());
    }

    #[tokio::test]
    async fn seeding_fires_no_events() {
        let store = memory_store();
        load(&store, Timestamp::now()).await.unwrap();

        assert!(store.events.list().await.unwrap().is_empty());
        assert!(store.transactions.list().await.unwrap().is_empty());
    }
}
