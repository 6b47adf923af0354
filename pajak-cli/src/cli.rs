use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pajak_core::TaxKind;
use rust_decimal::Decimal;

use crate::input::{RawRequest, parse_rupiah};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Indonesian tax calculator.
///
/// Computes income, withholding and value-added taxes and prints each result
/// together with the steps that produced it.
#[derive(Debug, Parser)]
#[command(name = "pajak", version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, either a bare level (`debug`) or a full directive.
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Append log output to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Reject unknown status and classification codes instead of
    /// falling back to their defaults
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    #[command(flatten)]
    Tax(TaxCommand),

    /// Evaluate every request in a CSV file
    Batch {
        /// CSV file with columns tax,amount,code,status,deductions,vat_included
        file: PathBuf,

        /// Write results here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List statutory rates, allowances and norm ratios
    Rates,
}

/// One subcommand per calculator. Amounts accept currency formatting such as
/// `"Rp 10.000.000"`.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum TaxCommand {
    /// Monthly employee withholding (PPh Pasal 21)
    Pph21 {
        /// Monthly gross salary
        #[arg(value_parser = parse_rupiah)]
        monthly_gross: Decimal,

        /// PTKP status, e.g. TK/0 or K/2
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Annual individual income tax on net income (PPh Pasal 17)
    Pph17 {
        /// Annual gross income
        #[arg(value_parser = parse_rupiah)]
        annual_income: Decimal,

        /// Deductible expenses
        #[arg(short, long, value_parser = parse_rupiah, default_value = "0")]
        deductions: Decimal,

        /// PTKP status, e.g. TK/0 or K/2
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Annual individual income tax using the deemed-profit norm
    Pph17Nppn {
        /// Annual gross turnover
        #[arg(value_parser = parse_rupiah)]
        annual_gross: Decimal,

        /// Business category: retail, manufacturing, service,
        /// professional, agriculture or other
        #[arg(short = 'n', long)]
        category: Option<String>,

        /// PTKP status, e.g. TK/0 or K/2
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Withholding on imports and government purchases (PPh Pasal 22)
    Pph22 {
        /// Transaction value
        #[arg(value_parser = parse_rupiah)]
        transaction_value: Decimal,

        /// Transaction kind: import, export or other
        #[arg(short, long)]
        kind: Option<String>,

        /// The value already includes 10% PPN
        #[arg(long, default_value_t = false)]
        vat_included: bool,
    },

    /// Withholding on services, royalties and dividends (PPh Pasal 23)
    Pph23 {
        /// Gross payment
        #[arg(value_parser = parse_rupiah)]
        amount: Decimal,

        /// Income kind: royalty, dividend, prize, service, management,
        /// consulting or other_service
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Value-added tax
    Ppn {
        /// Taxable supply value
        #[arg(value_parser = parse_rupiah)]
        amount: Decimal,

        /// Supply kind: domestic, import or export
        #[arg(short = 'u', long)]
        supply: Option<String>,
    },

    /// Final tax on small business turnover
    PphFinalUmkm {
        /// Gross turnover
        #[arg(value_parser = parse_rupiah)]
        gross_turnover: Decimal,
    },

    /// Withholding on payments to non-residents (PPh Pasal 26)
    Pph26 {
        /// Gross payment
        #[arg(value_parser = parse_rupiah)]
        amount: Decimal,

        /// Income kind: dividend, interest, royalty, service, salary,
        /// prize or other
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Deemed-profit tax on specific industries (PPh Pasal 15)
    Pph15 {
        /// Gross revenue
        #[arg(value_parser = parse_rupiah)]
        amount: Decimal,

        /// Business: shipping, insurance, buildoperate or other
        #[arg(short, long)]
        kind: Option<String>,
    },
}

impl TaxCommand {
    /// The calculator this subcommand runs and its unresolved inputs.
    pub fn raw(&self) -> (TaxKind, RawRequest<'_>) {
        match self {
            Self::Pph21 {
                monthly_gross,
                status,
            } => (
                TaxKind::Pph21,
                RawRequest {
                    status: status.as_deref(),
                    ..RawRequest::new(*monthly_gross)
                },
            ),
            Self::Pph17 {
                annual_income,
                deductions,
                status,
            } => (
                TaxKind::Pph17,
                RawRequest {
                    status: status.as_deref(),
                    deductions: *deductions,
                    ..RawRequest::new(*annual_income)
                },
            ),
            Self::Pph17Nppn {
                annual_gross,
                category,
                status,
            } => (
                TaxKind::Pph17Nppn,
                RawRequest {
                    code: category.as_deref(),
                    status: status.as_deref(),
                    ..RawRequest::new(*annual_gross)
                },
            ),
            Self::Pph22 {
                transaction_value,
                kind,
                vat_included,
            } => (
                TaxKind::Pph22,
                RawRequest {
                    code: kind.as_deref(),
                    vat_included: *vat_included,
                    ..RawRequest::new(*transaction_value)
                },
            ),
            Self::Pph23 { amount, kind } => (
                TaxKind::Pph23,
                RawRequest {
                    code: kind.as_deref(),
                    ..RawRequest::new(*amount)
                },
            ),
            Self::Ppn { amount, supply } => (
                TaxKind::Ppn,
                RawRequest {
                    code: supply.as_deref(),
                    ..RawRequest::new(*amount)
                },
            ),
            Self::PphFinalUmkm { gross_turnover } => {
                (TaxKind::PphFinalUmkm, RawRequest::new(*gross_turnover))
            }
            Self::Pph26 { amount, kind } => (
                TaxKind::Pph26,
                RawRequest {
                    code: kind.as_deref(),
                    ..RawRequest::new(*amount)
                },
            ),
            Self::Pph15 { amount, kind } => (
                TaxKind::Pph15,
                RawRequest {
                    code: kind.as_deref(),
                    ..RawRequest::new(*amount)
                },
            ),
        }
    }
}
