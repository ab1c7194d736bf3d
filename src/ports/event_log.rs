//! Event log port - append-only record of fired events.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::notification::Event;

/// Append-only event log. `list` returns events in the order they were
/// appended.
#[async_trait]
pub trait EventLog: Send + Sync {
    async fn append(&self, event: Event) -> Result<(), DomainError>;

    async fn list(&self) -> Result<Vec<Event>, DomainError>;

    /// Drops every event. Only used by the admin reset.
    async fn clear(&self) -> Result<(), DomainError>;
}
