//! Provider count stepper
//!
//! The number of providers a quote covers. Every way of changing it clamps
//! to a minimum of 1, so an invalid count is never observable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of providers; always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ProviderCount(u32);

impl ProviderCount {
    /// Lowest allowed count
    pub const MIN: u32 = 1;

    /// Create a count, clamping values below the minimum
    pub fn new(value: u32) -> Self {
        Self(value.max(Self::MIN))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Add one provider. There is no upper bound short of `u32::MAX`.
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Remove one provider, never going below 1.
    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(Self::MIN);
    }

    /// Apply text typed into the numeric field.
    ///
    /// Blank input counts as 0, decimals and exponents are accepted and
    /// truncated, and anything unparseable, negative or non-finite lands on 1.
    pub fn set_direct(&mut self, input: &str) {
        self.0 = parse_count(input);
    }
}

impl Default for ProviderCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for ProviderCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for ProviderCount {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value < Self::MIN {
            return Err(format!("provider count must be at least {}", Self::MIN));
        }
        Ok(Self(value))
    }
}

impl From<ProviderCount> for u32 {
    fn from(count: ProviderCount) -> u32 {
        count.0
    }
}

/// Read a numeric field the way a browser number input reports it.
fn parse_count(input: &str) -> u32 {
    let trimmed = input.trim();
    let value = if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    };

    if !value.is_finite() {
        return ProviderCount::MIN;
    }

    // `as` saturates: negatives become 0, huge values become u32::MAX
    (value.trunc() as u32).max(ProviderCount::MIN)
}
