//! Non-taxable personal allowance (PTKP) table.

use rust_decimal::Decimal;

use crate::models::{ClosedCode, PtkpStatus};

/// Annual allowance for a personal status.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::PtkpStatus;
/// use pajak_core::calculations::allowance;
///
/// assert_eq!(allowance::allowance(PtkpStatus::K1), dec!(63000000));
/// ```
pub fn allowance(status: PtkpStatus) -> Decimal {
    let amount: i64 = match status {
        PtkpStatus::Tk0 => 54_000_000,
        PtkpStatus::Tk1 => 58_500_000,
        PtkpStatus::Tk2 => 63_000_000,
        PtkpStatus::Tk3 => 67_500_000,
        PtkpStatus::K0 => 58_500_000,
        PtkpStatus::K1 => 63_000_000,
        PtkpStatus::K2 => 67_500_000,
        PtkpStatus::K3 => 72_000_000,
    };
    Decimal::from(amount)
}

/// Allowance for a raw status code. Unknown codes get the `TK/0` allowance.
pub fn allowance_for_code(code: &str) -> Decimal {
    allowance(PtkpStatus::parse_or_default(code))
}
