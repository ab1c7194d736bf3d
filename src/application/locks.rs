//! Per-subscription mutation locks.
//!
//! Every read-modify-write of an existing subscription runs under its
//! lock, webhook delivery included, so concurrent requests against the
//! same id apply one after the other.
//!
//! An id is only registered while someone holds or waits for its lock;
//! the last guard to drop removes it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockMap = HashMap<String, Arc<AsyncMutex<()>>>;

#[derive(Default)]
pub struct SubscriptionLocks {
    locks: Mutex<LockMap>,
}

/// Exclusive access to one subscription until dropped.
pub struct SubscriptionGuard<'a> {
    registry: &'a SubscriptionLocks,
    subscription_id: String,
    _held: OwnedMutexGuard<()>,
}

impl SubscriptionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `subscription_id`.
    pub async fn acquire(&self, subscription_id: &str) -> SubscriptionGuard<'_> {
        let lock = Arc::clone(self.map().entry(subscription_id.to_string()).or_default());
        let held = lock.lock_owned().await;

        SubscriptionGuard {
            registry: self,
            subscription_id: subscription_id.to_string(),
            _held: held,
        }
    }

    /// Number of ids currently registered.
    pub fn registered(&self) -> usize {
        self.map().len()
    }

    // Entries are plain inserts and removes, so a poisoned map is still
    // consistent.
    fn map(&self) -> MutexGuard<'_, LockMap> {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for SubscriptionGuard<'_> {
    fn drop(&mut self) {
        // An entry is idle when only the map refers to it, or for our own
        // id, the map and this guard. Idle entries left behind by cancelled
        // waiters go too.
        self.registry.map().retain(|id, lock| {
            let holders = if *id == self.subscription_id { 2 } else { 1 };
            Arc::strong_count(lock) > holders
        });
    }
}
