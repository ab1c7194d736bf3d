//! Subscription read side.

use crate::domain::billing::BillingError;
use crate::domain::subscription::{Subscription, SubscriptionStatus};
use crate::ports::Store;

/// Optional list filters. Both must match when given.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionFilter {
    pub customer_id: Option<String>,
    pub status: Option<SubscriptionStatus>,
}

pub struct SubscriptionQueries {
    store: Store,
}

impl SubscriptionQueries {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn get(&self, id: &str) -> Result<Subscription, BillingError> {
        self.store
            .subscriptions
            .get(id)
            .await?
            .ok_or_else(|| BillingError::not_found("Subscription", id))
    }

    pub async fn list(&self, filter: &SubscriptionFilter) -> Result<Vec<Subscription>, BillingError> {
        let subscriptions = self.store.subscriptions.list().await?;
        Ok(subscriptions
            .into_iter()
            .filter(|s| {
                filter
                    .customer_id
                    .as_deref()
                    .map_or(true, |c| s.customer_id.as_str() == c)
            })
            .filter(|s| filter.status.map_or(true, |status| s.status == status))
            .collect())
    }
}
