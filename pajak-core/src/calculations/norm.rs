//! Deemed net-income norms (NPPN).

use rust_decimal::Decimal;

use crate::models::{ClosedCode, NormCategory};

/// Share of gross turnover deemed to be net income.
pub fn norm_ratio(category: NormCategory) -> Decimal {
    match category {
        NormCategory::Retail => Decimal::new(20, 2),
        NormCategory::Manufacturing => Decimal::new(125, 3),
        NormCategory::Service => Decimal::new(30, 2),
        NormCategory::Professional => Decimal::new(50, 2),
        NormCategory::Agriculture => Decimal::new(15, 2),
        NormCategory::Other => Decimal::new(225, 3),
    }
}

/// Norm for a raw category code. Unknown codes get the `other` norm (22.5%).
pub fn norm_ratio_for_code(code: &str) -> Decimal {
    norm_ratio(NormCategory::parse_or_default(code))
}
