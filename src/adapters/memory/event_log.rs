//! In-memory event log.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::notification::Event;
use crate::ports::EventLog;

#[derive(Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::store("event log lock poisoned")
}

#[async_trait]
impl EventLog for InMemoryEventLog {
    async fn append(&self, event: Event) -> Result<(), DomainError> {
        self.events.write().map_err(|_| poisoned())?.push(event);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        Ok(self.events.read().map_err(|_| poisoned())?.clone())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.events.write().map_err(|_| poisoned())?.clear();
        Ok(())
    }
}
