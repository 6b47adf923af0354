use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::max_amount;
use crate::models::{
    CalculationResult, NormCategory, Pph15Business, Pph22Transaction, Pph23Income, Pph26Income,
    PpnSupply, PtkpStatus, TaxKind,
};

/// An amount in a [`TaxRequest`] outside `0..=`[`max_amount`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    #[error("{field} exceeds the supported maximum of {limit}, got {value}")]
    TooLarge {
        field: &'static str,
        value: Decimal,
        limit: Decimal,
    },
}

/// The inputs of exactly one calculator.
///
/// Front ends build a request from user input and call
/// [`TaxRequest::calculate`]; the variant decides which calculator runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tax", rename_all = "kebab-case")]
pub enum TaxRequest {
    Pph21 {
        monthly_gross: Decimal,
        status: PtkpStatus,
    },
    Pph17 {
        annual_income: Decimal,
        deductions: Decimal,
        status: PtkpStatus,
    },
    Pph17Nppn {
        annual_gross: Decimal,
        category: NormCategory,
        status: PtkpStatus,
    },
    Pph22 {
        transaction_value: Decimal,
        vat_included: bool,
        kind: Pph22Transaction,
    },
    Pph23 {
        amount: Decimal,
        kind: Pph23Income,
    },
    Ppn {
        amount: Decimal,
        supply: PpnSupply,
    },
    PphFinalUmkm {
        gross_turnover: Decimal,
    },
    Pph26 {
        amount: Decimal,
        kind: Pph26Income,
    },
    Pph15 {
        amount: Decimal,
        kind: Pph15Business,
    },
}

impl TaxRequest {
    pub fn kind(&self) -> TaxKind {
        match self {
            Self::Pph21 { .. } => TaxKind::Pph21,
            Self::Pph17 { .. } => TaxKind::Pph17,
            Self::Pph17Nppn { .. } => TaxKind::Pph17Nppn,
            Self::Pph22 { .. } => TaxKind::Pph22,
            Self::Pph23 { .. } => TaxKind::Pph23,
            Self::Ppn { .. } => TaxKind::Ppn,
            Self::PphFinalUmkm { .. } => TaxKind::PphFinalUmkm,
            Self::Pph26 { .. } => TaxKind::Pph26,
            Self::Pph15 { .. } => TaxKind::Pph15,
        }
    }

    /// Every amount in the request, named by field.
    pub fn amounts(&self) -> Vec<(&'static str, Decimal)> {
        match *self {
            Self::Pph21 { monthly_gross, .. } => vec![("monthly_gross", monthly_gross)],
            Self::Pph17 {
                annual_income,
                deductions,
                ..
            } => vec![("annual_income", annual_income), ("deductions", deductions)],
            Self::Pph17Nppn { annual_gross, .. } => vec![("annual_gross", annual_gross)],
            Self::Pph22 {
                transaction_value, ..
            } => vec![("transaction_value", transaction_value)],
            Self::Pph23 { amount, .. }
            | Self::Ppn { amount, .. }
            | Self::Pph26 { amount, .. }
            | Self::Pph15 { amount, .. } => vec![("amount", amount)],
            Self::PphFinalUmkm { gross_turnover } => vec![("gross_turnover", gross_turnover)],
        }
    }

    /// Checks every amount against `0..=`[`max_amount`].
    pub fn validate(&self) -> Result<(), RequestError> {
        let limit = max_amount();
        for (field, value) in self.amounts() {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(RequestError::Negative { field, value });
            }
            if value > limit {
                return Err(RequestError::TooLarge {
                    field,
                    value,
                    limit,
                });
            }
        }
        Ok(())
    }

    /// Validates the amounts, then runs the matching calculator.
    pub fn calculate(&self) -> Result<CalculationResult, RequestError> {
        self.validate()?;
        let result = match *self {
            Self::Pph21 {
                monthly_gross,
                status,
            } => super::pph21(monthly_gross, status),
            Self::Pph17 {
                annual_income,
                deductions,
                status,
            } => super::pph17(annual_income, deductions, status),
            Self::Pph17Nppn {
                annual_gross,
                category,
                status,
            } => super::pph17_nppn(annual_gross, category, status),
            Self::Pph22 {
                transaction_value,
                vat_included,
                kind,
            } => super::pph22(transaction_value, vat_included, kind),
            Self::Pph23 { amount, kind } => super::pph23(amount, kind),
            Self::Ppn { amount, supply } => super::ppn(amount, supply),
            Self::PphFinalUmkm { gross_turnover } => super::pph_final_umkm(gross_turnover),
            Self::Pph26 { amount, kind } => super::pph26(amount, kind),
            Self::Pph15 { amount, kind } => super::pph15(amount, kind),
        };
        Ok(result)
    }
}
