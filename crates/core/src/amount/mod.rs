//! Canonical two-decimal currency amounts.
//!
//! CRITICAL: Never use floating point types for money! `CurrencyAmount`
//! wraps `rust_decimal::Decimal` and locks every value to at most two
//! fractional digits, rounding half-to-even wherever a computation
//! produces more.

mod ops;
mod serde;

#[cfg(test)]
mod props;

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ParseAmountError;

/// A monetary amount in canonical two-decimal form.
///
/// The inner decimal always carries at most two fractional digits. Every
/// construction path funnels through [`CurrencyAmount::from_decimal`],
/// which rounds half-to-even at two decimal places before wrapping, and
/// the field itself is private, so no caller can smuggle in a
/// non-canonical value. Equality, ordering, and hashing all delegate to
/// the numeric decimal comparison, so `1.00 == 1`.
///
/// Arithmetic operators re-canonicalize after every step. Chained
/// operator arithmetic therefore rounds at each step; use
/// [`CurrencyAmount::map_decimal`] when a multi-stage formula must round
/// exactly once at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CurrencyAmount(Decimal);

impl CurrencyAmount {
    /// Number of fractional digits in the canonical representation.
    pub const SCALE: u32 = 2;

    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Coerces a raw decimal into a canonical amount.
    ///
    /// Rounds to two decimal places with half-to-even (banker's) rounding,
    /// so repeated aggregation does not drift the way an always-round-up
    /// policy would. Every decimal coerces to some canonical amount.
    #[must_use]
    pub fn from_decimal(decimal: Decimal) -> Self {
        Self(decimal.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointNearestEven))
    }

    /// Builds an amount from an exact count of minor units (cents).
    ///
    /// The two-place left shift lands exactly on the canonical scale, so
    /// this path needs no rounding pass. `12_34` becomes `12.34`.
    #[must_use]
    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::from_i128_with_scale(i128::from(cents), Self::SCALE))
    }

    /// Builds an amount from a whole number of dollars.
    #[must_use]
    pub fn from_dollars(dollars: i64) -> Self {
        Self::from_decimal(Decimal::from(dollars))
    }

    /// Returns the underlying canonical decimal.
    #[must_use]
    pub const fn decimal(&self) -> Decimal {
        self.0
    }

    /// Converts to a count of minor units (cents).
    ///
    /// Shifts the decimal point two places right and truncates toward
    /// zero; for a canonical value the truncation never discards anything.
    /// Returns `None` for negative amounts, which have no minor-unit
    /// count.
    #[must_use]
    pub fn to_cents(&self) -> Option<u64> {
        self.0.checked_mul(Decimal::ONE_HUNDRED)?.trunc().to_u64()
    }

    /// Returns `true` if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Runs a multi-step computation on the raw decimal, rounding once at
    /// the end.
    ///
    /// Operator arithmetic re-canonicalizes after every operation, so a
    /// chain of operators compounds per-step rounding. The closure here
    /// works on the raw decimal at full precision and only the final
    /// result goes back through [`CurrencyAmount::from_decimal`].
    ///
    /// ```
    /// use razoo_core::CurrencyAmount;
    /// use rust_decimal::Decimal;
    ///
    /// let price: CurrencyAmount = "10.01".parse()?;
    /// let half = Decimal::new(5, 1);
    /// let two = Decimal::from(2);
    ///
    /// // Chained operators round in the middle and lose a cent.
    /// assert_eq!((price * half * two).to_string(), "10.00");
    ///
    /// // A scoped computation rounds once and keeps it.
    /// assert_eq!(price.map_decimal(|d| d * half * two), price);
    /// # Ok::<(), razoo_core::ParseAmountError>(())
    /// ```
    #[must_use]
    pub fn map_decimal<F>(self, f: F) -> Self
    where
        F: FnOnce(Decimal) -> Decimal,
    {
        Self::from_decimal(f(self.0))
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a plain decimal literal: an optional leading `-`, ASCII digits,
/// and at most one `.`. Currency symbols and grouping separators are
/// rejected with dedicated errors rather than being stripped silently.
impl FromStr for CurrencyAmount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_literal(s)?;
        let decimal = Decimal::from_str(s).map_err(|source| ParseAmountError::InvalidNumber {
            input: s.to_owned(),
            source,
        })?;
        Ok(Self::from_decimal(decimal))
    }
}

/// Rejects input outside the plain-literal grammar before the decimal
/// parser sees it. The decimal parser itself is laxer (it tolerates
/// underscore separators, for one), so this gate is what keeps the wire
/// grammar strict.
fn validate_literal(s: &str) -> Result<(), ParseAmountError> {
    if s.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    for (index, character) in s.char_indices() {
        match character {
            '0'..='9' | '.' => {}
            '-' if index == 0 => {}
            '$' | '\u{a4}' | '\u{20ac}' | '\u{a3}' | '\u{a5}' => {
                return Err(ParseAmountError::CurrencySymbol(s.to_owned()));
            }
            ',' | '_' | ' ' | '\u{a0}' => {
                return Err(ParseAmountError::GroupingSeparator(s.to_owned()));
            }
            _ => {
                return Err(ParseAmountError::InvalidCharacter {
                    input: s.to_owned(),
                    character,
                });
            }
        }
    }
    Ok(())
}
