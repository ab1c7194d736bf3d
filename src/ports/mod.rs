//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the billing rules and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `Repository<T>` - keyed collections for each resource kind
//! - `EventLog` - append-only record of fired events
//! - `IdGenerator` / `Clock` - id and time sources
//!
//! ## Delivery Ports
//!
//! - `WebhookTransport` - sends one signed webhook body

mod clock;
mod event_log;
mod id_generator;
mod repository;
mod store;
mod webhook_transport;

pub use clock::Clock;
pub use event_log::EventLog;
pub use id_generator::{next_id, IdGenerator};
pub use repository::{Repository, Resource};
pub use store::Store;
pub use webhook_transport::{DeliveryError, WebhookDelivery, WebhookTransport};
