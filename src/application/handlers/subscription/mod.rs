//! Subscription lifecycle handlers.

mod activate;
mod advance_time;
mod charge;
mod create;
mod effects;
mod items;
mod queries;
mod transition;
mod update;

pub use activate::{ActivateSubscriptionCommand, ActivateSubscriptionHandler};
pub use advance_time::{AdvanceTimeCommand, AdvanceTimeHandler};
pub use charge::{ChargeSubscriptionCommand, ChargeSubscriptionHandler};
pub use create::{CreateSubscriptionCommand, CreateSubscriptionHandler};
pub use effects::EffectRunner;
pub use items::{resolve_items, ItemRequest};
pub use queries::{SubscriptionFilter, SubscriptionQueries};
pub use update::{UpdateSubscriptionCommand, UpdateSubscriptionHandler};
