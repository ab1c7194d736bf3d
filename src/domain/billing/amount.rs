//! Minor-unit money amounts.
//!
//! Prices carry amounts as decimal strings in the smallest currency unit
//! (`"500"` = $5.00). Parsing keeps only ASCII digits and drops everything
//! else, so `"1,000"` reads as 1000 while `"-5"` reads as 5 and `"4.99"` as 499.
//! Arithmetic saturates at `u64::MAX`.

use std::fmt;
use std::iter::Sum;

use serde::{Deserialize, Serialize};

/// An amount in minor currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinorUnits(u64);

impl MinorUnits {
    pub const ZERO: MinorUnits = MinorUnits(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Reads the digits of `raw`, ignoring any other character.
    pub fn parse_lenient(raw: &str) -> Self {
        let value = raw
            .chars()
            .filter_map(|c| c.to_digit(10))
            .fold(0u64, |acc, digit| {
                acc.saturating_mul(10).saturating_add(u64::from(digit))
            });
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn plus(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Sum for MinorUnits {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MinorUnits::ZERO, MinorUnits::plus)
    }
}

/// A price amount paired with its currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Minor units as a decimal string.
    pub amount: String,
    pub currency_code: String,
}

impl Money {
    pub fn new(amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: currency_code.into(),
        }
    }

    pub fn minor_units(&self) -> MinorUnits {
        MinorUnits::parse_lenient(&self.amount)
    }
}
