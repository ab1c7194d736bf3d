//! Application layer - command handlers and the webhook dispatcher.
//!
//! Handlers load state from the [`Store`](crate::ports::Store), apply
//! domain rules, write back and fire webhooks before returning.

pub mod dispatcher;
pub mod handlers;
pub mod locks;

pub use dispatcher::WebhookDispatcher;
pub use locks::SubscriptionLocks;
