//! Billing primitives shared by subscriptions and transactions.
//!
//! - [`period`]: billing period calculator and cycle types
//! - [`amount`]: minor-unit money parsing and arithmetic
//! - [`errors`]: the request-facing error taxonomy

mod amount;
mod errors;
mod period;

pub use amount::{MinorUnits, Money};
pub use errors::BillingError;
pub use period::{add_period, BillingCycle, BillingInterval, BillingPeriod, TrialPeriod};
