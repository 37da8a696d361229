use crate::error::{HoneypotError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A likelihood value in the closed interval `[0, 1]`.
///
/// Wraps `rust_decimal::Decimal` so that keyword increments add up exactly
/// (three hits of 0.15 are 0.45, not 0.44999...). Serialized as a JSON float;
/// deserialization goes through [`Score::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Score(#[serde(serialize_with = "rust_decimal::serde::float::serialize")] Decimal);

impl Score {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const ONE: Self = Self(Decimal::ONE);

    pub fn new(value: Decimal) -> Result<Self> {
        if value >= Decimal::ZERO && value <= Decimal::ONE {
            Ok(Self(value))
        } else {
            Err(HoneypotError::ValidationError(format!(
                "Score must be within [0, 1], got {value}"
            )))
        }
    }

    /// Builds a score, pinning out-of-range values to the nearest bound.
    pub fn clamped(value: Decimal) -> Self {
        Self(value.clamp(Decimal::ZERO, Decimal::ONE))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        Self::clamped(self.0 + rhs.0)
    }

    /// Rounds half away from zero to `dp` decimal places.
    pub fn rounded(self, dp: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl TryFrom<Decimal> for Score {
    type Error = HoneypotError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Score> for Decimal {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
