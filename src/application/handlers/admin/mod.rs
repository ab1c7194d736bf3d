//! Administrative handlers: reset and manual webhook triggers.
//!
//! Simulated time is advanced through
//! [`AdvanceTimeHandler`](crate::application::handlers::subscription::AdvanceTimeHandler).

mod reset;
mod trigger_webhook;

pub use reset::{ResetOptions, ResetStoreHandler};
pub use trigger_webhook::{manual_trigger_payload, TriggerWebhookCommand, TriggerWebhookHandler};
