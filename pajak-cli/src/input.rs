//! Turning user text into calculator requests.
//!
//! Amounts are typed the way they appear on an invoice ("Rp 10.000.000");
//! codes are resolved either strictly or with the core's fail-open fallback,
//! depending on configuration.

use std::sync::LazyLock;

use pajak_core::calculations::common::max_amount;
use pajak_core::{
    ClosedCode, NormCategory, Pph15Business, Pph22Transaction, Pph23Income, Pph26Income,
    PpnSupply, PtkpStatus, TaxKind, TaxRequest, UnknownCodeError,
};
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

static NON_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D+").unwrap());

/// Error returned when text cannot be read as a rupiah amount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("amount '{0}' contains no digits")]
    Empty(String),

    #[error("amount '{0}' is negative")]
    Negative(String),

    #[error("amount '{input}' exceeds the maximum of {limit}")]
    TooLarge { input: String, limit: Decimal },
}

/// Parses a rupiah amount by discarding every non-digit character.
///
/// Currency symbols and thousands separators are ignored, so `"Rp 10.000.000"`
/// and `"10,000,000"` both read as ten million. Decimal separators are
/// discarded too; amounts are whole rupiah. Anything above
/// [`max_amount`] (10^18 rupiah) is rejected.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_cli::input::parse_rupiah;
///
/// assert_eq!(parse_rupiah("Rp 10.000.000").unwrap(), dec!(10000000));
/// assert!(parse_rupiah("-5000").is_err());
/// ```
pub fn parse_rupiah(input: &str) -> Result<Decimal, ParseAmountError> {
    let trimmed = input.trim();
    if trimmed.starts_with('-') {
        return Err(ParseAmountError::Negative(input.to_string()));
    }

    let digits = NON_DIGITS.replace_all(trimmed, "");
    if digits.is_empty() {
        return Err(ParseAmountError::Empty(input.to_string()));
    }

    let limit = max_amount();
    let too_large = || ParseAmountError::TooLarge {
        input: input.to_string(),
        limit,
    };
    let amount: Decimal = digits.parse().map_err(|_| too_large())?;
    if amount > limit {
        return Err(too_large());
    }
    Ok(amount)
}

/// Calculator inputs before their codes are resolved.
///
/// Both the per-tax subcommands and batch rows reduce to this shape. `code`
/// holds the classification of the tax (transaction kind, income kind,
/// supply, business or norm category); taxes without one ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequest<'a> {
    pub amount: Decimal,
    pub code: Option<&'a str>,
    pub status: Option<&'a str>,
    pub deductions: Decimal,
    pub vat_included: bool,
}

impl<'a> RawRequest<'a> {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            code: None,
            status: None,
            deductions: Decimal::ZERO,
            vat_included: false,
        }
    }
}

/// Resolves status and classification codes under the configured policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeResolver {
    /// Reject unknown codes instead of falling back to the default.
    pub strict: bool,
    /// Status used when a progressive calculation names none.
    pub default_status: PtkpStatus,
}

impl Default for CodeResolver {
    fn default() -> Self {
        Self {
            strict: false,
            default_status: PtkpStatus::default(),
        }
    }
}

impl CodeResolver {
    /// Resolves an optional code. A missing code is the set's default; an
    /// unknown one is an error in strict mode and the default otherwise.
    pub fn resolve<C>(
        &self,
        code: Option<&str>,
    ) -> Result<C, UnknownCodeError>
    where
        C: ClosedCode + Default,
    {
        match code {
            None => Ok(C::default()),
            Some(code) if self.strict => {
                C::parse(code).ok_or_else(|| UnknownCodeError::new(C::KIND, code))
            }
            Some(code) => Ok(C::parse_or_default(code)),
        }
    }

    /// Like [`CodeResolver::resolve`], but a missing status falls back to the
    /// configured default rather than `TK/0`.
    pub fn status(
        &self,
        code: Option<&str>,
    ) -> Result<PtkpStatus, UnknownCodeError> {
        match code {
            None => Ok(self.default_status),
            Some(_) => self.resolve(code),
        }
    }

    /// Builds the typed request for `tax`.
    pub fn request(
        &self,
        tax: TaxKind,
        raw: &RawRequest<'_>,
    ) -> Result<TaxRequest, UnknownCodeError> {
        let amount = raw.amount;
        let request = match tax {
            TaxKind::Pph21 => TaxRequest::Pph21 {
                monthly_gross: amount,
                status: self.status(raw.status)?,
            },
            TaxKind::Pph17 => TaxRequest::Pph17 {
                annual_income: amount,
                deductions: raw.deductions,
                status: self.status(raw.status)?,
            },
            TaxKind::Pph17Nppn => TaxRequest::Pph17Nppn {
                annual_gross: amount,
                category: self.resolve::<NormCategory>(raw.code)?,
                status: self.status(raw.status)?,
            },
            TaxKind::Pph22 => TaxRequest::Pph22 {
                transaction_value: amount,
                vat_included: raw.vat_included,
                kind: self.resolve::<Pph22Transaction>(raw.code)?,
            },
            TaxKind::Pph23 => TaxRequest::Pph23 {
                amount,
                kind: self.resolve::<Pph23Income>(raw.code)?,
            },
            TaxKind::Ppn => TaxRequest::Ppn {
                amount,
                supply: self.resolve::<PpnSupply>(raw.code)?,
            },
            TaxKind::PphFinalUmkm => TaxRequest::PphFinalUmkm {
                gross_turnover: amount,
            },
            TaxKind::Pph26 => TaxRequest::Pph26 {
                amount,
                kind: self.resolve::<Pph26Income>(raw.code)?,
            },
            TaxKind::Pph15 => TaxRequest::Pph15 {
                amount,
                kind: self.resolve::<Pph15Business>(raw.code)?,
            },
        };
        Ok(request)
    }
}
