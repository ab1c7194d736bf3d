//! Catalog read side: products, prices, customers, transactions, events
//! and notification settings.

use crate::domain::billing::BillingError;
use crate::domain::catalog::{Customer, Price, Product};
use crate::domain::notification::{Event, NotificationSetting};
use crate::domain::transaction::Transaction;
use crate::ports::{Repository, Resource, Store};

/// Optional transaction filters. Both must match when given.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub subscription_id: Option<String>,
    pub customer_id: Option<String>,
}

pub struct CatalogQueries {
    store: Store,
}

async fn get_or_not_found<T: Resource>(
    repository: &dyn Repository<T>,
    id: &str,
) -> Result<T, BillingError> {
    repository
        .get(id)
        .await?
        .ok_or_else(|| BillingError::not_found(T::KIND, id))
}

impl CatalogQueries {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, BillingError> {
        Ok(self.store.products.list().await?)
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, BillingError> {
        get_or_not_found(self.store.products.as_ref(), id).await
    }

    /// With `include_product` each price embeds its product, when it exists.
    pub async fn list_prices(&self, include_product: bool) -> Result<Vec<Price>, BillingError> {
        let prices = self.store.prices.list().await?;
        if !include_product {
            return Ok(prices);
        }

        let mut expanded = Vec::with_capacity(prices.len());
        for price in prices {
            expanded.push(self.with_product(price).await?);
        }
        Ok(expanded)
    }

    pub async fn get_price(&self, id: &str, include_product: bool) -> Result<Price, BillingError> {
        let price = get_or_not_found(self.store.prices.as_ref(), id).await?;
        if include_product {
            self.with_product(price).await
        } else {
            Ok(price)
        }
    }

    async fn with_product(&self, price: Price) -> Result<Price, BillingError> {
        let product = self.store.products.get(price.product_id.as_str()).await?;
        Ok(price.including_product(product))
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, BillingError> {
        Ok(self.store.customers.list().await?)
    }

    pub async fn get_customer(&self, id: &str) -> Result<Customer, BillingError> {
        get_or_not_found(self.store.customers.as_ref(), id).await
    }

    pub async fn list_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, BillingError> {
        let transactions = self.store.transactions.list().await?;
        Ok(transactions
            .into_iter()
            .filter(|t| {
                filter.subscription_id.as_deref().map_or(true, |id| {
                    t.subscription_id.as_ref().map(|s| s.as_str()) == Some(id)
                })
            })
            .filter(|t| {
                filter
                    .customer_id
                    .as_deref()
                    .map_or(true, |id| t.customer_id.as_str() == id)
            })
            .collect())
    }

    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, BillingError> {
        get_or_not_found(self.store.transactions.as_ref(), id).await
    }

    /// Events in the order they were fired.
    pub async fn list_events(&self) -> Result<Vec<Event>, BillingError> {
        Ok(self.store.events.list().await?)
    }

    pub async fn list_notification_settings(&self) -> Result<Vec<NotificationSetting>, BillingError> {
        Ok(self.store.notification_settings.list().await?)
    }
}
