//! Monetary amounts
//!
//! Plan prices and quotes are whole currency units. Keeping them in an
//! unsigned integer makes "cost is never negative" a property of the type,
//! and the arithmetic saturates instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A non-negative amount in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(0);

    /// Create an amount from whole units
    pub const fn new(units: u64) -> Self {
        Money(units)
    }

    /// The raw number of units
    pub const fn units(self) -> u64 {
        self.0
    }

    /// Multiply by a count, saturating at `u64::MAX`
    pub fn times(self, count: u32) -> Self {
        Money(self.0.saturating_mul(u64::from(count)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        self.times(rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Formats as the raw sum with a dollar sign, e.g. `$450`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl From<u64> for Money {
    fn from(units: u64) -> Self {
        Money(units)
    }
}
