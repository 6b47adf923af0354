//! Common utility functions for tax calculations.
//!
//! Every calculator rounds through [`round_rupiah`] at a single, documented
//! stage; nothing else in the crate rounds amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to whole rupiah using half-away-from-zero rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::calculations::common::round_rupiah;
///
/// assert_eq!(round_rupiah(dec!(408333.33)), dec!(408333));
/// assert_eq!(round_rupiah(dec!(12.5)), dec!(13));
/// assert_eq!(round_rupiah(dec!(-12.5)), dec!(-13)); // Away from zero
/// ```
pub fn round_rupiah(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a difference of amounts at zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(10000) - dec!(15000)), dec!(0));
/// assert_eq!(non_negative(dec!(250)), dec!(250));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Largest amount any calculator accepts: 10^18 rupiah.
///
/// Annualizing a monthly figure at this bound still fits comfortably in a
/// [`Decimal`], so no calculator can overflow on in-range input.
pub fn max_amount() -> Decimal {
    Decimal::from(1_000_000_000_000_000_000_i64)
}

/// Renders a rate as a percentage without trailing zeros (`0.075` → `7.5`).
pub fn percent(rate: Decimal) -> String {
    (rate * Decimal::ONE_HUNDRED).normalize().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_rupiah tests
    // =========================================================================

    #[test]
    fn round_rupiah_rounds_down_below_midpoint() {
        let result = round_rupiah(dec!(1234.49));

        assert_eq!(result, dec!(1234));
    }

    #[test]
    fn round_rupiah_rounds_up_at_midpoint() {
        let result = round_rupiah(dec!(1234.5));

        assert_eq!(result, dec!(1235));
    }

    #[test]
    fn round_rupiah_rounds_up_above_midpoint() {
        let result = round_rupiah(dec!(1234.51));

        assert_eq!(result, dec!(1235));
    }

    #[test]
    fn round_rupiah_handles_negative_midpoint() {
        let result = round_rupiah(dec!(-1234.5));

        assert_eq!(result, dec!(-1235)); // Away from zero
    }

    #[test]
    fn round_rupiah_drops_fractional_scale() {
        let result = round_rupiah(dec!(1500000.00));

        assert_eq!(result.scale(), 0);
        assert_eq!(result.to_string(), "1500000");
    }

    #[test]
    fn round_rupiah_handles_zero() {
        assert_eq!(round_rupiah(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn round_rupiah_handles_long_fractions() {
        // 100 / 1.1 = 90.9090...
        let result = round_rupiah(dec!(100) / dec!(1.1));

        assert_eq!(result, dec!(91));
    }

    // =========================================================================
    // non_negative tests
    // =========================================================================

    #[test]
    fn non_negative_keeps_positive_value() {
        assert_eq!(non_negative(dec!(200)), dec!(200));
    }

    #[test]
    fn non_negative_clamps_negative_difference_to_zero() {
        assert_eq!(non_negative(dec!(10000) - dec!(15000)), Decimal::ZERO);
    }

    #[test]
    fn max_amount_annualizes_without_overflow() {
        assert_eq!(
            max_amount().checked_mul(Decimal::from(12)),
            Some(dec!(12000000000000000000))
        );
    }

    // =========================================================================
    // percent tests
    // =========================================================================

    #[test]
    fn percent_strips_trailing_zeros() {
        assert_eq!(percent(dec!(0.075)), "7.5");
        assert_eq!(percent(dec!(0.0025)), "0.25");
        assert_eq!(percent(dec!(0.10)), "10");
        assert_eq!(percent(Decimal::ZERO), "0");
    }
}
