//! In-memory keyed repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{Repository, Resource};

/// `BTreeMap`-backed repository. Ordered keys give creation-order listing
/// for sequential ids.
pub struct InMemoryRepository<T> {
    items: RwLock<BTreeMap<String, T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(kind: &str) -> DomainError {
    DomainError::store(format!("{} store lock poisoned", kind))
}

#[async_trait]
impl<T: Resource> Repository<T> for InMemoryRepository<T> {
    async fn get(&self, id: &str) -> Result<Option<T>, DomainError> {
        let items = self.items.read().map_err(|_| poisoned(T::KIND))?;
        Ok(items.get(id).cloned())
    }

    async fn set(&self, resource: T) -> Result<(), DomainError> {
        let mut items = self.items.write().map_err(|_| poisoned(T::KIND))?;
        items.insert(resource.key().to_string(), resource);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<T>, DomainError> {
        let items = self.items.read().map_err(|_| poisoned(T::KIND))?;
        Ok(items.values().cloned().collect())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.items.write().map_err(|_| poisoned(T::KIND))?.clear();
        Ok(())
    }
}
