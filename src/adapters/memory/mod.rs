//! In-memory storage adapters.
//!
//! The mock keeps all state in process; nothing survives a restart.

mod clock;
mod event_log;
mod ids;
mod repository;

pub use clock::{FixedClock, SystemClock};
pub use event_log::InMemoryEventLog;
pub use ids::SequentialIdGenerator;
pub use repository::InMemoryRepository;

use std::sync::Arc;

use crate::ports::{Clock, Store};

/// Builds an empty store on the wall clock.
pub fn memory_store() -> Store {
    memory_store_with_clock(Arc::new(SystemClock))
}

/// Builds an empty store on the given clock.
pub fn memory_store_with_clock(clock: Arc<dyn Clock>) -> Store {
    Store {
        products: Arc::new(InMemoryRepository::new()),
        prices: Arc::new(InMemoryRepository::new()),
        customers: Arc::new(InMemoryRepository::new()),
        subscriptions: Arc::new(InMemoryRepository::new()),
        transactions: Arc::new(InMemoryRepository::new()),
        notification_settings: Arc::new(InMemoryRepository::new()),
        events: Arc::new(InMemoryEventLog::new()),
        ids: Arc::new(SequentialIdGenerator::new()),
        clock,
    }
}
