//! HTTP adapter - the Paddle-style REST API.
//!
//! - `/v1/*` - catalog, customers, transactions, events, notification
//!   settings and the subscription lifecycle (bearer auth)
//! - `/admin/*` - simulated time, manual webhooks and reset (open)
//! - `/ping` - liveness (open, no envelope)

pub mod admin;
pub mod catalog;
pub mod envelope;
pub mod error;
pub mod middleware;
pub mod router;
pub mod state;
pub mod subscriptions;

pub use envelope::{ApiJson, RequestMeta};
pub use error::ApiError;
pub use middleware::{ApiKeyAuth, PrefixedRequestId};
pub use router::app_router;
pub use state::AppState;

#[cfg(test)]
pub(crate) mod test_support;
