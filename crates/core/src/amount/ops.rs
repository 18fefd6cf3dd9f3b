//! Arithmetic operators for [`CurrencyAmount`].
//!
//! Every operator computes on the raw decimals and then re-canonicalizes
//! through [`CurrencyAmount::from_decimal`], so each step independently
//! rounds to two decimal places. Multi-step formulas that must round once
//! at the end go through [`CurrencyAmount::map_decimal`] instead.

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

use rust_decimal::{Decimal, RoundingStrategy};

use super::CurrencyAmount;
use crate::percent::Percent;

impl Add for CurrencyAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_decimal(self.0 + rhs.0)
    }
}

impl Sub for CurrencyAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_decimal(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for CurrencyAmount {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self {
        Self::from_decimal(self.0 * rhs)
    }
}

impl Mul<i32> for CurrencyAmount {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::from_decimal(self.0 * Decimal::from(rhs))
    }
}

impl Mul<Percent> for CurrencyAmount {
    type Output = Self;

    fn mul(self, rhs: Percent) -> Self {
        Self::from_decimal(self.0 * rhs.as_fraction())
    }
}

impl Mul<CurrencyAmount> for Decimal {
    type Output = CurrencyAmount;

    fn mul(self, rhs: CurrencyAmount) -> CurrencyAmount {
        rhs * self
    }
}

impl Mul<CurrencyAmount> for i32 {
    type Output = CurrencyAmount;

    fn mul(self, rhs: CurrencyAmount) -> CurrencyAmount {
        rhs * self
    }
}

/// Divides by a raw decimal scalar.
///
/// The quotient re-canonicalizes like every other operator. Division by
/// zero panics, the same as dividing the underlying decimals.
impl Div<Decimal> for CurrencyAmount {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self {
        Self::from_decimal(self.0 / rhs)
    }
}

impl Sum for CurrencyAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a CurrencyAmount> for CurrencyAmount {
    fn sum<I: Iterator<Item = &'a CurrencyAmount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl CurrencyAmount {
    /// Divides with an explicit half-to-even rounding pass at two decimal
    /// places.
    ///
    /// Division is the operation most likely to throw off a long
    /// non-terminating quotient, so this variant names the rounding
    /// decision at the call site. The result is the same canonical value
    /// the `/` operator produces.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero, the same as dividing the underlying
    /// decimals.
    #[must_use]
    pub fn divide_and_round(self, divisor: impl Into<Decimal>) -> Self {
        let quotient = self.0 / divisor.into();
        Self::from_decimal(
            quotient.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointNearestEven),
        )
    }
}
