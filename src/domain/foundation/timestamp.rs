//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Latest representable instant. Calendar arithmetic saturates here.
    pub const MAX: Timestamp = Timestamp(DateTime::<Utc>::MAX_UTC);

    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Adds whole days, or `None` past the representable range.
    pub fn checked_add_days(&self, days: u64) -> Option<Self> {
        let days = i64::try_from(days).ok()?;
        let delta = Duration::try_days(days)?;
        self.0.checked_add_signed(delta).map(Self)
    }

    /// Adds calendar months keeping the day of month. A day the target
    /// month lacks rolls over into the next one (Jan 31 + 1 month = Mar 2
    /// in a leap year).
    pub fn checked_add_months(&self, months: u32) -> Option<Self> {
        let date = self.0.date_naive();
        let month_index =
            i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
        let year = i32::try_from(month_index.div_euclid(12)).ok()?;
        let month0 = u32::try_from(month_index.rem_euclid(12)).ok()?;

        let first_of_month = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
        let target = first_of_month.checked_add_days(Days::new(u64::from(date.day0())))?;
        Some(Self(target.and_time(self.0.time()).and_utc()))
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    pub fn plus_secs(&self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }

    /// Creates a timestamp from Unix seconds, or `None` when out of range.
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Returns the timestamp as Unix seconds.
    pub fn as_unix_secs(&self) -> i64 {
        self.0.timestamp()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
