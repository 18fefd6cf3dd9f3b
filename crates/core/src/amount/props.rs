//! Property-based tests for the canonical amount invariants.

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use super::CurrencyAmount;

/// Strategy to generate raw decimals across scales 0 to 6, both signs.
fn raw_decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=6).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to generate canonical amounts, negative values included.
fn canonical_amount() -> impl Strategy<Value = CurrencyAmount> {
    any::<i64>().prop_map(|cents| CurrencyAmount::from_decimal(Decimal::new(cents, 2)))
}

/// Strategy to generate canonical amounts that cannot be negative.
fn nonnegative_amount() -> impl Strategy<Value = CurrencyAmount> {
    any::<u64>().prop_map(CurrencyAmount::from_cents)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every coercion result carries at most two fractional digits.
    #[test]
    fn prop_coerced_scale_is_at_most_two(decimal in raw_decimal()) {
        let amount = CurrencyAmount::from_decimal(decimal);
        prop_assert!(amount.decimal().scale() <= 2);
    }

    /// Coercing an already canonical value changes nothing.
    #[test]
    fn prop_coercion_is_idempotent(decimal in raw_decimal()) {
        let amount = CurrencyAmount::from_decimal(decimal);
        let again = amount
            .decimal()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        prop_assert_eq!(amount.decimal(), again);
    }

    /// Minor-unit counts survive the cents round trip exactly.
    #[test]
    fn prop_cents_round_trip_is_exact(cents in any::<u64>()) {
        prop_assert_eq!(CurrencyAmount::from_cents(cents).to_cents(), Some(cents));
    }

    /// Non-negative amounts survive the reverse round trip through cents.
    #[test]
    fn prop_amounts_survive_the_cents_round_trip(amount in nonnegative_amount()) {
        let cents = amount.to_cents().expect("non-negative amount has a cents count");
        prop_assert_eq!(CurrencyAmount::from_cents(cents), amount);
    }

    /// Negative amounts never report a cents count.
    #[test]
    fn prop_negative_amounts_have_no_cents(amount in canonical_amount()) {
        if amount.is_negative() {
            prop_assert_eq!(amount.to_cents(), None);
        } else {
            prop_assert!(amount.to_cents().is_some());
        }
    }

    /// The wire encoding always decodes back to the same value.
    #[test]
    fn prop_wire_round_trip(amount in canonical_amount()) {
        let encoded = serde_json::to_string(&amount).unwrap();
        let decoded: CurrencyAmount = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, amount);
    }

    /// The display form parses back to the same value.
    #[test]
    fn prop_display_parses_back(amount in canonical_amount()) {
        let parsed: CurrencyAmount = amount.to_string().parse().unwrap();
        prop_assert_eq!(parsed, amount);
    }

    /// Addition stays canonical and subtraction inverts it exactly.
    #[test]
    fn prop_add_is_exact_at_canonical_scale(a in canonical_amount(), b in canonical_amount()) {
        let sum = a + b;
        prop_assert!(sum.decimal().scale() <= 2);
        prop_assert_eq!(sum - b, a);
    }

    /// Amount ordering is exactly the numeric decimal ordering.
    #[test]
    fn prop_ordering_matches_the_decimals(a in canonical_amount(), b in canonical_amount()) {
        prop_assert_eq!(a.cmp(&b), a.decimal().cmp(&b.decimal()));
    }
}
