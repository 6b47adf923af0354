//! Income taxes on individuals, computed with the Article 17 schedule.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::{labels, push_progressive};
use crate::calculations::allowance::allowance;
use crate::calculations::common::{max_amount, non_negative, round_rupiah};
use crate::calculations::norm::norm_ratio;
use crate::calculations::progressive::pph17_tax;
use crate::models::{CalculationResult, NormCategory, PtkpStatus, TaxKind};

/// PPh 21 on a monthly salary.
///
/// The salary is annualised, the allowance subtracted and the schedule
/// applied. Outputs are the monthly tax (first) and the annual tax; the
/// monthly figure is the rounded annual tax divided by twelve and rounded
/// again.
///
/// `monthly_gross` must not exceed [`max_amount`]. Larger values are
/// annualised with a saturating multiply and logged at `warn`, so the
/// result is meaningless but the call never panics.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::{PtkpStatus, pph21};
/// use pajak_core::calculations::calculators::labels;
///
/// let result = pph21(dec!(10000000), PtkpStatus::Tk0);
///
/// assert_eq!(result.output(labels::PPH21_MONTHLY), Some(dec!(408333)));
/// assert_eq!(result.output(labels::PPH21_ANNUAL), Some(dec!(4900000)));
/// ```
pub fn pph21(
    monthly_gross: Decimal,
    status: PtkpStatus,
) -> CalculationResult {
    debug!(%monthly_gross, %status, "calculating PPh 21");

    let annual_gross = monthly_gross
        .checked_mul(Decimal::from(12))
        .unwrap_or_else(|| {
            warn!(%monthly_gross, limit = %max_amount(), "monthly gross overflows when annualised");
            Decimal::MAX
        });
    let ptkp = allowance(status);
    let tax = pph17_tax(non_negative(annual_gross - ptkp));
    let monthly_tax = tax.monthly_tax();

    let mut result = CalculationResult::new(TaxKind::Pph21);
    result.push_step(labels::ANNUAL_GROSS, annual_gross);
    result.push_step(labels::ptkp(status), ptkp);
    push_progressive(&mut result, &tax);
    result.push_step(labels::PPH21_ANNUAL, tax.annual_tax);
    result.push_step(labels::PPH21_MONTHLY, monthly_tax);
    result.push_output(labels::PPH21_MONTHLY, monthly_tax);
    result.push_output(labels::PPH21_ANNUAL, tax.annual_tax);
    result
}

/// Annual PPh 17 for an individual keeping books: income less deductions
/// less the allowance.
pub fn pph17(
    annual_income: Decimal,
    deductions: Decimal,
    status: PtkpStatus,
) -> CalculationResult {
    debug!(%annual_income, %deductions, %status, "calculating PPh 17");

    let net_income = non_negative(annual_income - deductions);
    let ptkp = allowance(status);
    let tax = pph17_tax(non_negative(net_income - ptkp));

    let mut result = CalculationResult::new(TaxKind::Pph17);
    result.push_step(labels::ANNUAL_GROSS, annual_income);
    result.push_step(labels::DEDUCTIONS, deductions);
    result.push_step(labels::NET_INCOME, net_income);
    result.push_step(labels::ptkp(status), ptkp);
    push_progressive(&mut result, &tax);
    result.push_step(TaxKind::Pph17.title(), tax.annual_tax);
    result.push_output(TaxKind::Pph17.title(), tax.annual_tax);
    result
}

/// Annual PPh 17 using the deemed net-income norm (NPPN).
///
/// Deemed net income is `gross × norm`, rounded to whole rupiah before the
/// allowance is subtracted.
pub fn pph17_nppn(
    annual_gross: Decimal,
    category: NormCategory,
    status: PtkpStatus,
) -> CalculationResult {
    debug!(%annual_gross, %category, %status, "calculating PPh 17 with NPPN");

    let ratio = norm_ratio(category);
    let deemed_net_income = round_rupiah(annual_gross * ratio);
    let ptkp = allowance(status);
    let tax = pph17_tax(non_negative(deemed_net_income - ptkp));

    let mut result = CalculationResult::new(TaxKind::Pph17Nppn);
    result.push_step(labels::ANNUAL_GROSS, annual_gross);
    result.push_step(labels::norm(ratio), deemed_net_income);
    result.push_step(labels::ptkp(status), ptkp);
    push_progressive(&mut result, &tax);
    result.push_step(TaxKind::Pph17Nppn.title(), tax.annual_tax);
    result.push_output(TaxKind::Pph17Nppn.title(), tax.annual_tax);
    result
}
