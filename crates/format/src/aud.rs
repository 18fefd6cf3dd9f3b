//! Australian-dollar display formatting.

use razoo_core::CurrencyAmount;
use rust_decimal::RoundingStrategy;
use thousands::Separable;

use crate::AmountFormatter;

/// Formats amounts with Australian-dollar conventions.
///
/// A `$` symbol, a comma every three integer digits, two fraction digits
/// (none when rounding to whole dollars), and the sign ahead of the
/// symbol for negative amounts: `-$1,234.50`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AudFormatter;

impl AmountFormatter for AudFormatter {
    fn format(
        &self,
        amount: CurrencyAmount,
        with_symbol: bool,
        rounded_to_dollars: bool,
    ) -> String {
        let scale = if rounded_to_dollars {
            0
        } else {
            CurrencyAmount::SCALE
        };
        // Display rounding is a separate pass over the stored value, with
        // the same half-to-even policy the amount itself uses.
        let rounded = amount
            .decimal()
            .round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven);

        let magnitude = rounded.abs();
        let digits = if rounded_to_dollars {
            format!("{magnitude:.0}")
        } else {
            format!("{magnitude:.2}")
        };
        let grouped = digits.separate_with_commas();

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let symbol = if with_symbol { "$" } else { "" };
        format!("{sign}{symbol}{grouped}")
    }
}
