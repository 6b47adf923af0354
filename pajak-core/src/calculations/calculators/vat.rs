use rust_decimal::Decimal;
use tracing::debug;

use super::{flat_result, labels};
use crate::calculations::flat_rate::apply_classified;
use crate::models::{CalculationResult, PpnSupply, TaxKind};

/// Value-added tax on a supply. Exports are zero-rated.
pub fn ppn(
    amount: Decimal,
    supply: PpnSupply,
) -> CalculationResult {
    debug!(%amount, %supply, "calculating PPN");
    let flat = apply_classified(amount, supply, false);
    flat_result(TaxKind::Ppn, labels::TAX_BASE, "PPN", &flat)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn domestic_supply_at_ten_percent() {
        let result = ppn(dec!(10000000), PpnSupply::Domestic);

        assert_eq!(result.amount(), dec!(1000000));
        assert_eq!(result.output("PPN"), Some(dec!(1000000)));
        assert_eq!(result.step("Tarif PPN (10%)"), Some(dec!(1000000)));
    }

    #[test]
    fn import_at_ten_percent() {
        assert_eq!(ppn(dec!(2500000), PpnSupply::Import).amount(), dec!(250000));
    }

    #[test]
    fn export_is_zero_rated() {
        let result = ppn(dec!(10000000), PpnSupply::Export);

        assert_eq!(result.amount(), dec!(0));
        assert_eq!(result.step("Tarif PPN (0%)"), Some(dec!(0)));
    }
}
