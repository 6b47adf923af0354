//! Withholding taxes levied at a single rate per classification.

use rust_decimal::Decimal;
use tracing::debug;

use super::{flat_result, labels};
use crate::calculations::flat_rate::apply_classified;
use crate::models::{
    CalculationResult, Pph15Business, Pph22Transaction, Pph23Income, Pph26Income, TaxKind,
};

/// PPh 22 on imports and other transactions.
///
/// With `vat_included` the transaction value is first reduced to its pre-VAT
/// amount, except for exports where the flag has no effect.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::{Pph22Transaction, pph22};
///
/// let result = pph22(dec!(110000000), true, Pph22Transaction::Import);
///
/// assert_eq!(result.amount(), dec!(7500000));
/// ```
pub fn pph22(
    transaction_value: Decimal,
    vat_included: bool,
    kind: Pph22Transaction,
) -> CalculationResult {
    debug!(%transaction_value, vat_included, %kind, "calculating PPh 22");
    let flat = apply_classified(transaction_value, kind, vat_included);
    flat_result(TaxKind::Pph22, labels::TAX_BASE, "PPh 22", &flat)
}

/// PPh 23 on capital income (15%) and service fees (2%).
pub fn pph23(
    amount: Decimal,
    kind: Pph23Income,
) -> CalculationResult {
    debug!(%amount, %kind, "calculating PPh 23");
    let flat = apply_classified(amount, kind, false);
    flat_result(TaxKind::Pph23, labels::TAX_BASE, "PPh 23", &flat)
}

/// PPh 26 on payments to non-residents, at the flat domestic rate.
pub fn pph26(
    amount: Decimal,
    kind: Pph26Income,
) -> CalculationResult {
    debug!(%amount, %kind, "calculating PPh 26");
    let flat = apply_classified(amount, kind, false);
    flat_result(TaxKind::Pph26, labels::TAX_BASE, "PPh 26", &flat)
}

/// PPh 15 for businesses taxed on deemed profit.
pub fn pph15(
    amount: Decimal,
    kind: Pph15Business,
) -> CalculationResult {
    debug!(%amount, %kind, "calculating PPh 15");
    let flat = apply_classified(amount, kind, false);
    flat_result(TaxKind::Pph15, labels::TAX_BASE, "PPh 15", &flat)
}
