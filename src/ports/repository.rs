//! Repository port for stored billing resources.
//!
//! Every resource kind lives in its own keyed collection. Listing returns
//! resources in ascending key order, which for sequential ids is creation
//! order.

use async_trait::async_trait;

use crate::domain::catalog::{Customer, Price, Product};
use crate::domain::foundation::DomainError;
use crate::domain::notification::NotificationSetting;
use crate::domain::subscription::Subscription;
use crate::domain::transaction::Transaction;

/// A resource that can be stored under its string id.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Human readable kind, used in not-found messages.
    const KIND: &'static str;

    fn key(&self) -> &str;
}

/// Keyed storage for one resource kind.
///
/// `set` inserts or replaces. Implementations must never hand out
/// references into their storage: callers always receive copies.
#[async_trait]
pub trait Repository<T: Resource>: Send + Sync {
    /// Find a resource by id. Returns `None` if absent.
    async fn get(&self, id: &str) -> Result<Option<T>, DomainError>;

    /// Insert or replace a resource.
    async fn set(&self, resource: T) -> Result<(), DomainError>;

    /// All resources in ascending id order.
    async fn list(&self) -> Result<Vec<T>, DomainError>;

    /// Remove everything.
    async fn clear(&self) -> Result<(), DomainError>;
}

impl Resource for Product {
    const KIND: &'static str = "Product";

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Resource for Price {
    const KIND: &'static str = "Price";

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Resource for Customer {
    const KIND: &'static str = "Customer";

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Resource for Subscription {
    const KIND: &'static str = "Subscription";

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Resource for Transaction {
    const KIND: &'static str = "Transaction";

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Resource for NotificationSetting {
    const KIND: &'static str = "Notification setting";

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn Repository<Subscription>) {}
        fn _accepts_dyn_price(_repo: &dyn Repository<Price>) {}
    }

    #[test]
    fn keys_are_resource_ids() {
        let product = crate::domain::subscription::fixtures::product();
        assert_eq!(product.key(), "pro_base");
    }
}
