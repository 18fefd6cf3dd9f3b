//! Percentage points for rate arithmetic.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A percentage expressed in points: `7.5` means 7.5%.
///
/// Multiplying a [`CurrencyAmount`](crate::CurrencyAmount) by a `Percent`
/// applies the fractional form (`points / 100`) and re-canonicalizes the
/// product like any other amount arithmetic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percent(Decimal);

impl Percent {
    /// Builds a percentage from points: `7.5` points is 7.5%.
    #[must_use]
    pub const fn from_points(points: Decimal) -> Self {
        Self(points)
    }

    /// Builds a percentage from a fraction: `0.075` is 7.5%.
    #[must_use]
    pub fn from_fraction(fraction: Decimal) -> Self {
        Self(fraction * Decimal::ONE_HUNDRED)
    }

    /// Returns the points: `7.5` for 7.5%.
    #[must_use]
    pub const fn points(&self) -> Decimal {
        self.0
    }

    /// Returns the fractional multiplier: `0.075` for 7.5%.
    #[must_use]
    pub fn as_fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
