//! The store bundle handed to application handlers.

use std::sync::Arc;

use super::{Clock, EventLog, IdGenerator, Repository};
use crate::domain::catalog::{Customer, Price, Product};
use crate::domain::foundation::DomainError;
use crate::domain::notification::NotificationSetting;
use crate::domain::subscription::Subscription;
use crate::domain::transaction::Transaction;

/// All collections of the mock, plus the id and time sources.
#[derive(Clone)]
pub struct Store {
    pub products: Arc<dyn Repository<Product>>,
    pub prices: Arc<dyn Repository<Price>>,
    pub customers: Arc<dyn Repository<Customer>>,
    pub subscriptions: Arc<dyn Repository<Subscription>>,
    pub transactions: Arc<dyn Repository<Transaction>>,
    pub notification_settings: Arc<dyn Repository<NotificationSetting>>,
    pub events: Arc<dyn EventLog>,
    pub ids: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
}

impl Store {
    /// Empties every collection. The id counter keeps counting.
    pub async fn clear(&self) -> Result<(), DomainError> {
        self.products.clear().await?;
        self.prices.clear().await?;
        self.customers.clear().await?;
        self.subscriptions.clear().await?;
        self.transactions.clear().await?;
        self.notification_settings.clear().await?;
        self.events.clear().await
    }
}
