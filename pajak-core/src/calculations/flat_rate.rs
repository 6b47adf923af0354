//! Single-rate taxes with an optional VAT-inclusive base adjustment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_rupiah;

/// Factor that strips 10% VAT from a VAT-inclusive amount.
fn vat_inclusive_divisor() -> Decimal {
    Decimal::new(11, 1)
}

/// A classification that determines its own flat rate.
pub trait FlatRated {
    fn rate(&self) -> Decimal;

    /// Whether a VAT-inclusive base is reduced to its pre-VAT value before
    /// the rate applies. Classifications that ignore the flag return `false`.
    fn strips_included_vat(&self) -> bool {
        false
    }
}

/// Result of [`apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRateTax {
    /// The base as supplied.
    pub base: Decimal,
    /// The base the rate was applied to, unrounded.
    pub adjusted_base: Decimal,
    pub rate: Decimal,
    /// `adjusted_base × rate`, rounded to whole rupiah.
    pub tax: Decimal,
}

/// Applies `rate` to `base`.
///
/// When `inclusive_of_vat` is set the base is divided by 1.1 first. The
/// adjusted base is not rounded; only the final tax is.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::calculations::flat_rate;
///
/// let result = flat_rate::apply(dec!(110000000), dec!(0.075), true);
///
/// assert_eq!(result.adjusted_base, dec!(100000000));
/// assert_eq!(result.tax, dec!(7500000));
/// ```
pub fn apply(
    base: Decimal,
    rate: Decimal,
    inclusive_of_vat: bool,
) -> FlatRateTax {
    debug_assert!(
        !base.is_sign_negative(),
        "tax base must be non-negative, got {base}"
    );

    let adjusted_base = if inclusive_of_vat {
        base / vat_inclusive_divisor()
    } else {
        base
    };

    FlatRateTax {
        base,
        adjusted_base,
        rate,
        tax: round_rupiah(adjusted_base * rate),
    }
}

/// Applies the rate of `classification`, honouring the VAT-inclusive flag
/// only where the classification allows it.
pub fn apply_classified<C: FlatRated>(
    base: Decimal,
    classification: C,
    inclusive_of_vat: bool,
) -> FlatRateTax {
    apply(
        base,
        classification.rate(),
        inclusive_of_vat && classification.strips_included_vat(),
    )
}
