//! Subscription module - the lifecycle engine's domain.
//!
//! - [`SubscriptionStatus`]: status state machine
//! - [`Subscription`]: aggregate with creation and in-place mutations
//! - [`advance_transition`] / [`activation_transition`]: status-keyed
//!   transition tables returning the new state and its side effects

mod aggregate;
mod lifecycle;
mod status;

pub use aggregate::{
    CollectionMode, ItemSelection, NewSubscription, ScheduledChange, ScheduledChangeAction,
    Subscription, SubscriptionItem,
};
pub use lifecycle::{
    activation_transition, advance_transition, LifecycleEffect, Transition, TransitionContext,
    TransitionFn,
};
pub use status::SubscriptionStatus;

#[cfg(test)]
pub(crate) use aggregate::fixtures;
