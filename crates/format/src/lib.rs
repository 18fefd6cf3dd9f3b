//! Locale display formatting for Razoo currency amounts.
//!
//! The core crate owns correctness: canonical scale, rounding, and the
//! wire codec. This crate owns presentation. [`AmountFormatter`] is the
//! adapter contract the embedding application fills in with its host
//! locale conventions; [`AudFormatter`] is the Australian-dollar
//! implementation. Display strings are for humans only and are never a
//! stable interchange format.

pub mod aud;

pub use aud::AudFormatter;

use razoo_core::CurrencyAmount;

/// Adapter contract for rendering amounts with host locale conventions.
///
/// Implementations apply their own half-to-even rounding pass at the
/// display scale: two fraction digits normally, none when
/// `rounded_to_dollars` is set. Display rounding never feeds back into
/// the stored value. Grouping separators appear whether or not the
/// symbol does.
pub trait AmountFormatter {
    /// Renders `amount` with this formatter's locale conventions.
    fn format(
        &self,
        amount: CurrencyAmount,
        with_symbol: bool,
        rounded_to_dollars: bool,
    ) -> String;

    /// Renders with the default presentation: symbol shown, cents kept.
    fn formatted(&self, amount: CurrencyAmount) -> String {
        self.format(amount, true, false)
    }

    /// Renders like [`AmountFormatter::formatted`], except a zero amount
    /// becomes the given `free` label.
    fn formatted_or_free(&self, amount: CurrencyAmount, free: &str) -> String {
        if amount.is_zero() {
            free.to_owned()
        } else {
            self.formatted(amount)
        }
    }
}
