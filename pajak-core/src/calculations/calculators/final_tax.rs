use rust_decimal::Decimal;
use tracing::debug;

use super::{flat_result, labels};
use crate::calculations::flat_rate::apply;
use crate::calculations::rates::umkm_final_rate;
use crate::models::{CalculationResult, TaxKind};

/// Final tax on the gross turnover of a micro, small or medium enterprise.
///
/// The same 0.5% applies to corporate and individual taxpayers.
pub fn pph_final_umkm(gross_turnover: Decimal) -> CalculationResult {
    debug!(%gross_turnover, "calculating PPh Final UMKM");
    let flat = apply(gross_turnover, umkm_final_rate(), false);
    flat_result(TaxKind::PphFinalUmkm, labels::GROSS_TURNOVER, "PPh Final", &flat)
}
