//! Core pricing calculation functions.
//!
//! Pure functions for fare math - no database access.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::models::PricingRule;

/// Round to the cent, halves rounding up.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use delivery_pricing::pricing::round_to_cents;
///
/// assert_eq!(round_to_cents(dec!(1.005)), dec!(1.01));
/// assert_eq!(round_to_cents(dec!(1.234)), dec!(1.23));
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Piecewise linear fare.
///
/// Up to `base_distance_km` the flat `fix_price` is charged as stored, without
/// rounding. From the base distance on, every further km costs `km_price` and
/// the sum is rounded to the cent.
///
/// Returns `None` when the fare does not fit in a [`Decimal`].
pub fn calculate_price(
    total_distance: Decimal,
    base_distance_km: Decimal,
    km_price: Decimal,
    fix_price: Decimal,
) -> Option<Decimal> {
    if base_distance_km <= total_distance {
        let extra = total_distance
            .checked_sub(base_distance_km)?
            .checked_mul(km_price)?;
        fix_price.checked_add(extra).map(round_to_cents)
    } else {
        Some(fix_price)
    }
}

/// Apply [`calculate_price`] to a stored rule
pub fn price_for_rule(rule: &PricingRule, total_distance: Decimal) -> Option<Decimal> {
    calculate_price(
        total_distance,
        rule.base_distance_in_km,
        rule.km_price,
        rule.fix_price,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==================== round_to_cents tests ====================

    #[test]
    fn test_round_to_cents_half_up() {
        assert_eq!(round_to_cents(dec!(2.345)), dec!(2.35));
        assert_eq!(round_to_cents(dec!(2.355)), dec!(2.36));
        assert_eq!(round_to_cents(dec!(0.005)), dec!(0.01));
    }

    #[test]
    fn test_round_to_cents_normal_rounding() {
        assert_eq!(round_to_cents(dec!(1.234)), dec!(1.23));
        assert_eq!(round_to_cents(dec!(1.236)), dec!(1.24));
        assert_eq!(round_to_cents(dec!(1.2349)), dec!(1.23));
        assert_eq!(round_to_cents(dec!(999999.995)), dec!(1000000.00));
    }

    // ==================== calculate_price tests ====================

    #[test]
    fn test_beyond_base_distance() {
        // 10 + (12 - 5) * 1.5
        assert_eq!(
            calculate_price(dec!(12), dec!(5), dec!(1.5), dec!(10)),
            Some(dec!(20.5))
        );
    }

    #[test]
    fn test_within_base_distance_is_flat_fee() {
        assert_eq!(
            calculate_price(dec!(3), dec!(5), dec!(1.5), dec!(10)),
            Some(dec!(10))
        );
    }

    #[test]
    fn test_exactly_at_base_distance_uses_per_km_branch() {
        assert_eq!(
            calculate_price(dec!(5), dec!(5), dec!(1.5), dec!(10)),
            Some(dec!(10))
        );
        assert_eq!(
            calculate_price(dec!(5), dec!(5), dec!(1.5), dec!(10.004)),
            Some(dec!(10.00))
        );
    }

    #[test]
    fn test_rounding_only_beyond_base_distance() {
        // Within the base radius the stored fee comes back untouched
        assert_eq!(
            calculate_price(dec!(1), dec!(5), dec!(1), dec!(10.129)),
            Some(dec!(10.129))
        );
        // Beyond it the same fee is rounded to the cent
        assert_eq!(
            calculate_price(dec!(6), dec!(5), dec!(0), dec!(10.129)),
            Some(dec!(10.13))
        );
    }

    #[test]
    fn test_fractional_distance_rounds_to_cents() {
        // 8 + 2.333 * 1.1 = 10.5663
        assert_eq!(
            calculate_price(dec!(12.333), dec!(10), dec!(1.1), dec!(8)),
            Some(dec!(10.57))
        );
    }

    #[test]
    fn test_zero_base_distance_charges_every_km() {
        assert_eq!(
            calculate_price(dec!(0), dec!(0), dec!(2), dec!(3)),
            Some(dec!(3))
        );
        assert_eq!(
            calculate_price(dec!(4), dec!(0), dec!(2), dec!(3)),
            Some(dec!(11))
        );
    }

    #[test]
    fn test_overflowing_fare_is_none() {
        assert_eq!(calculate_price(Decimal::MAX, dec!(5), dec!(1.5), dec!(10)), None);
        assert_eq!(calculate_price(Decimal::MAX, dec!(0), dec!(1), dec!(10)), None);
        // Within the base radius nothing is computed
        assert_eq!(
            calculate_price(dec!(3), Decimal::MAX, Decimal::MAX, dec!(10)),
            Some(dec!(10))
        );
    }

    #[test]
    fn test_price_for_rule_uses_rule_fields() {
        let rule = PricingRule {
            id: 2,
            organization_id: 1,
            item_id: 2,
            zone: "central".to_string(),
            base_distance_in_km: dec!(10),
            km_price: dec!(1.0),
            fix_price: dec!(8),
        };
        assert_eq!(price_for_rule(&rule, dec!(15)), Some(dec!(13)));
    }
}
