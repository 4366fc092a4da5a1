//! Monetary amounts.
//!
//! Backed by `rust_decimal::Decimal` so balances never pick up binary
//! floating point drift. There is a single implicit currency.

use core::str::FromStr;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A signed decimal amount of money.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Exact sum. `None` when the result leaves the representable range or
    /// would need more significant digits than a `Decimal` holds (where
    /// `Decimal::checked_add` would silently round).
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        exact_sum(self.0, other.0).map(Amount)
    }

    /// Exact difference, with the same `None` cases as [`Amount::checked_add`].
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        exact_sum(self.0, -other.0).map(Amount)
    }
}

/// Adds two decimals on their aligned `i128` mantissas, then accepts the
/// result only if it fits a `Decimal` at its smallest exact scale.
fn exact_sum(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    let lhs = lhs.normalize();
    let rhs = rhs.normalize();
    let mut scale = lhs.scale().max(rhs.scale());

    // Scales differ by at most 28, so the factor itself always fits an i128.
    let align = |d: Decimal| d.mantissa().checked_mul(10i128.checked_pow(scale - d.scale())?);
    let mut mantissa = align(lhs)?.checked_add(align(rhs)?)?;

    while scale > 0 && mantissa % 10 == 0 {
        mantissa /= 10;
        scale -= 1;
    }

    Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}

impl ValueObject for Amount {}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::validation(format!("Amount: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sign_checks() {
        assert!(Amount::from(1).is_positive());
        assert!(!Amount::ZERO.is_positive());
        assert!(!Amount::ZERO.is_negative());
        assert!(Amount::from(-5).is_negative());
    }

    #[test]
    fn decimal_arithmetic_is_exact() {
        let a = Amount::new(dec!(0.1));
        let b = Amount::new(dec!(0.2));
        assert_eq!(a.checked_add(b), Some(Amount::new(dec!(0.3))));
        assert_eq!(
            Amount::from(1000).checked_sub(Amount::from(6000)),
            Some(Amount::from(-5000))
        );
    }

    #[test]
    fn overflow_is_reported_not_panicked() {
        let max = Amount::new(Decimal::MAX);
        assert_eq!(max.checked_add(Amount::from(1)), None);
        assert_eq!(Amount::new(Decimal::MIN).checked_sub(Amount::from(1)), None);
    }

    #[test]
    fn sums_needing_more_digits_than_a_decimal_holds_are_rejected() {
        let big = Amount::new(dec!(70000000000000000000000000000));
        assert_eq!(big.checked_add(Amount::new(dec!(0.1))), None);
        assert_eq!(big.checked_sub(Amount::new(dec!(0.1))), None);

        let odd = Amount::new(dec!(70000000000000000000000000001));
        assert_eq!(odd.checked_add(Amount::new(dec!(0.5))), None);
        assert_eq!(odd.checked_sub(Amount::new(dec!(0.5))), None);
    }

    #[test]
    fn exact_sums_at_the_edge_of_precision_are_kept() {
        // Mantissas sum past 96 bits, but the trailing zero drops out.
        let half = Amount::new(Decimal::from_i128_with_scale(50_000_000_000_000_000_000_000_000_000, 1));
        assert_eq!(
            half.checked_add(half),
            Some(Amount::new(dec!(10000000000000000000000000000)))
        );

        let big = Amount::new(dec!(70000000000000000000000000000));
        assert_eq!(
            big.checked_add(Amount::from(1)),
            Some(Amount::new(dec!(70000000000000000000000000001)))
        );
        assert_eq!(
            Amount::new(dec!(0.0000000000000000000000000001)).checked_add(Amount::new(dec!(1))),
            Some(Amount::new(dec!(1.0000000000000000000000000001)))
        );
    }

    #[test]
    fn integer_results_keep_integer_display() {
        let sum = Amount::from(1000).checked_add(Amount::from(500)).unwrap();
        assert_eq!(sum.to_string(), "1500");
        let diff = Amount::new(dec!(12.50)).checked_sub(Amount::new(dec!(0.25))).unwrap();
        assert_eq!(diff, Amount::new(dec!(12.25)));
    }

    fn decimal() -> impl Strategy<Value = Decimal> {
        (-MAX_MANTISSA..=MAX_MANTISSA, 0u32..=28)
            .prop_map(|(mantissa, scale)| Decimal::from_i128_with_scale(mantissa, scale))
    }

    const MAX_MANTISSA: i128 = 79_228_162_514_264_337_593_543_950_335;

    proptest! {
        /// Property: an accepted sum is exact, so subtracting either operand
        /// gives back the other.
        #[test]
        fn accepted_sums_are_exact(a in decimal(), b in decimal()) {
            let (a, b) = (Amount::new(a), Amount::new(b));
            if let Some(sum) = a.checked_add(b) {
                prop_assert_eq!(sum.checked_sub(b), Some(a));
                prop_assert_eq!(sum.checked_sub(a), Some(b));
            }
        }

        /// Property: small-scale sums agree with plain decimal addition.
        #[test]
        fn small_sums_match_decimal_addition(
            a in -1_000_000_000i64..1_000_000_000,
            b in -1_000_000_000i64..1_000_000_000,
            sa in 0u32..=6,
            sb in 0u32..=6
        ) {
            let a = Decimal::new(a, sa);
            let b = Decimal::new(b, sb);
            prop_assert_eq!(Amount::new(a).checked_add(Amount::new(b)), Some(Amount::new(a + b)));
            prop_assert_eq!(Amount::new(a).checked_sub(Amount::new(b)), Some(Amount::new(a - b)));
        }
    }

    #[test]
    fn parses_and_displays() {
        let amount: Amount = " 12.50 ".parse().unwrap();
        assert_eq!(amount.to_string(), "12.50");
        assert_eq!(Amount::from(-5000).to_string(), "-5000");
        assert!(matches!(
            "twelve".parse::<Amount>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn serializes_as_decimal_string() {
        let json = serde_json::to_string(&Amount::new(dec!(1500.25))).unwrap();
        assert_eq!(json, "\"1500.25\"");
    }
}
