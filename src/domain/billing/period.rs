//! Billing period calculator.
//!
//! Computes the end of a billing or trial window from a start instant,
//! an interval unit and a frequency. Unknown interval units fall back to
//! the month rule instead of being rejected.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Unit of a billing cycle or trial period.
///
/// Serialized as the bare lowercase unit (`"month"`). Any other string is
/// kept verbatim in `Other` so catalog data round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BillingInterval {
    Day,
    Week,
    Month,
    Year,
    Other(String),
}

impl BillingInterval {
    pub fn as_str(&self) -> &str {
        match self {
            BillingInterval::Day => "day",
            BillingInterval::Week => "week",
            BillingInterval::Month => "month",
            BillingInterval::Year => "year",
            BillingInterval::Other(unit) => unit,
        }
    }
}

impl From<String> for BillingInterval {
    fn from(unit: String) -> Self {
        match unit.as_str() {
            "day" => BillingInterval::Day,
            "week" => BillingInterval::Week,
            "month" => BillingInterval::Month,
            "year" => BillingInterval::Year,
            _ => BillingInterval::Other(unit),
        }
    }
}

impl From<BillingInterval> for String {
    fn from(interval: BillingInterval) -> Self {
        interval.as_str().to_string()
    }
}

/// Recurrence of a price: every `frequency` × `interval`.
///
/// Also used for trial periods, which share the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingCycle {
    pub interval: BillingInterval,
    pub frequency: u32,
}

/// Trial periods are expressed exactly like billing cycles.
pub type TrialPeriod = BillingCycle;

impl BillingCycle {
    pub fn new(interval: BillingInterval, frequency: u32) -> Self {
        Self {
            interval,
            frequency,
        }
    }

    /// One calendar month, used when no price declares a cycle.
    pub fn monthly() -> Self {
        Self::new(BillingInterval::Month, 1)
    }

    /// The window starting at `start` and lasting one cycle.
    pub fn period_from(&self, start: Timestamp) -> BillingPeriod {
        BillingPeriod {
            starts_at: start,
            ends_at: add_period(start, &self.interval, self.frequency),
        }
    }
}

impl Default for BillingCycle {
    fn default() -> Self {
        Self::monthly()
    }
}

/// A closed window of time; `starts_at <= ends_at` always holds when built
/// through [`BillingCycle::period_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
}

impl BillingPeriod {
    pub fn new(starts_at: Timestamp, ends_at: Timestamp) -> Self {
        Self { starts_at, ends_at }
    }

    pub fn is_well_ordered(&self) -> bool {
        self.starts_at <= self.ends_at
    }
}

/// End of a period of `frequency` × `interval` starting at `start`.
///
/// - `day`: `frequency` days
/// - `week`: `7 × frequency` days
/// - `month`: `frequency` calendar months
/// - `year`: `frequency` calendar years
/// - anything else: treated as `month`
///
/// Results past the representable range saturate at [`Timestamp::MAX`].
pub fn add_period(start: Timestamp, interval: &BillingInterval, frequency: u32) -> Timestamp {
    let end = match interval {
        BillingInterval::Day => start.checked_add_days(u64::from(frequency)),
        BillingInterval::Week => start.checked_add_days(7 * u64::from(frequency)),
        BillingInterval::Year => start.checked_add_months(frequency.saturating_mul(12)),
        BillingInterval::Month | BillingInterval::Other(_) => start.checked_add_months(frequency),
    };
    end.unwrap_or(Timestamp::MAX)
}
