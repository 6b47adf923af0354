//! One calculator per statutory tax type.
//!
//! Each calculator is a fixed pipeline over the allowance and norm tables
//! and the progressive or flat-rate engine. Its trace lists the tax base,
//! any allowance or deemed-income figures, the taxable base, the per-tier
//! breakdown (progressive taxes only) and finally the tax itself.
//!
//! Trace values are reported as computed. The VAT-stripped base and the
//! per-tier amounts may carry fractional rupiah; outputs never do.

mod final_tax;
mod income;
mod request;
mod vat;
mod withholding;

pub use final_tax::pph_final_umkm;
pub use income::{pph17, pph17_nppn, pph21};
pub use request::{RequestError, TaxRequest};
pub use vat::ppn;
pub use withholding::{pph15, pph22, pph23, pph26};

use crate::calculations::common::percent;
use crate::calculations::flat_rate::FlatRateTax;
use crate::calculations::progressive::ProgressiveTax;
use crate::models::{CalculationResult, TaxKind};

/// Trace labels and output names shared by the calculators.
pub mod labels {
    use rust_decimal::Decimal;

    use crate::calculations::common::percent;
    use crate::models::PtkpStatus;

    pub const ANNUAL_GROSS: &str = "Penghasilan Bruto Tahunan";
    pub const DEDUCTIONS: &str = "Biaya/Pengurang";
    pub const NET_INCOME: &str = "Penghasilan Neto";
    pub const TAXABLE_INCOME: &str = "Penghasilan Kena Pajak";
    pub const TAX_BASE: &str = "Dasar Pengenaan Pajak";
    pub const GROSS_TURNOVER: &str = "Peredaran Bruto";
    pub const PPH21_MONTHLY: &str = "PPh 21 Bulanan";
    pub const PPH21_ANNUAL: &str = "PPh 21 Tahunan";

    /// Allowance step, e.g. `PTKP (K/1)`.
    pub fn ptkp(status: PtkpStatus) -> String {
        format!("PTKP ({status})")
    }

    /// Deemed net income step, e.g. `Norma (22.5%)`.
    pub fn norm(ratio: Decimal) -> String {
        format!("Norma ({}%)", percent(ratio))
    }
}

/// Appends the taxable base and the per-tier breakdown.
fn push_progressive(
    result: &mut CalculationResult,
    tax: &ProgressiveTax,
) {
    result.push_step(labels::TAXABLE_INCOME, tax.taxable_base);
    result.steps.extend(tax.steps());
}

/// Builds the result of a single-rate tax: the base actually taxed, then
/// the tax labelled with its rate.
fn flat_result(
    kind: TaxKind,
    base_label: &str,
    short_name: &str,
    flat: &FlatRateTax,
) -> CalculationResult {
    let mut result = CalculationResult::new(kind);
    result.push_step(base_label, flat.adjusted_base);
    result.push_step(
        format!("Tarif {short_name} ({}%)", percent(flat.rate)),
        flat.tax,
    );
    result.push_output(kind.title(), flat.tax);
    result
}
