//! Batch evaluation of calculator requests stored as CSV.
//!
//! ## Input format
//!
//! Headers are matched by name, so column order does not matter. Surrounding
//! whitespace is trimmed.
//!
//! | Column         | Required | Notes                                                   |
//! |----------------|----------|---------------------------------------------------------|
//! | `tax`          | yes      | `pph21`, `pph17`, `pph17-nppn`, `pph22`, `pph23`, `ppn`, `pph-final-umkm`, `pph26`, `pph15` |
//! | `amount`       | yes      | Rupiah; separators and `Rp` are ignored                  |
//! | `code`         | no       | Classification or NPPN category; empty for the default   |
//! | `status`       | no       | PTKP status; empty for the configured default            |
//! | `deductions`   | no       | PPh 17 only                                              |
//! | `vat_included` | no       | PPh 22 only, `true` or `false`                           |
//!
//! ```csv
//! tax,amount,code,status,deductions,vat_included
//! pph21,10000000,,K/1,,
//! pph22,110000000,import,,,true
//! ```
//!
//! ## Output format
//!
//! One record per named output: `row,tax,output,amount`, where `row` is the
//! 1-based data row of the request.

use std::io;
use std::path::{Path, PathBuf};

use pajak_core::{ClosedCode, RequestError, TaxKind, TaxRequest, UnknownCodeError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::input::{CodeResolver, ParseAmountError, RawRequest, parse_rupiah};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    tax: String,
    amount: String,
    code: Option<String>,
    status: Option<String>,
    deductions: Option<String>,
    vat_included: Option<bool>,
}

/// One line of batch output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    pub row: usize,
    pub tax: TaxKind,
    pub output: String,
    pub amount: Decimal,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or writing batch data. Row numbers are
/// 1-based (header = row 0).
#[derive(Debug, Error)]
pub enum BatchError {
    /// Failure writing output or reading the header line.
    #[error("CSV error: {0}")]
    Parse(#[from] csv::Error),

    /// A data row with a missing required column or a mistyped field.
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unrecognised tax '{tax}' on row {row}")]
    InvalidTax { tax: String, row: usize },

    #[error("row {row}: {source}")]
    InvalidAmount {
        row: usize,
        #[source]
        source: ParseAmountError,
    },

    #[error("row {row}: {source}")]
    InvalidCode {
        row: usize,
        #[source]
        source: UnknownCodeError,
    },

    #[error("row {row}: {source}")]
    InvalidRequest {
        row: usize,
        #[source]
        source: RequestError,
    },
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
    resolver: &CodeResolver,
) -> Result<TaxRequest, BatchError> {
    let tax = TaxKind::parse(&row.tax).ok_or_else(|| BatchError::InvalidTax {
        tax: row.tax.clone(),
        row: row_number,
    })?;

    let amount = |text: &str| {
        parse_rupiah(text).map_err(|source| BatchError::InvalidAmount {
            row: row_number,
            source,
        })
    };

    let raw = RawRequest {
        amount: amount(&row.amount)?,
        code: row.code.as_deref(),
        status: row.status.as_deref(),
        deductions: match row.deductions.as_deref() {
            Some(text) => amount(text)?,
            None => Decimal::ZERO,
        },
        vat_included: row.vat_included.unwrap_or(false),
    };

    resolver
        .request(tax, &raw)
        .map_err(|source| BatchError::InvalidCode {
            row: row_number,
            source,
        })
}

/// Parses CSV text into requests, in file order.
///
/// # Errors
///
/// The first failing row aborts the load; its error carries the row number.
pub fn load_from_str(
    input: &str,
    resolver: &CodeResolver,
) -> Result<Vec<TaxRequest>, BatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let requests = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result.map_err(|source| BatchError::InvalidRow {
                row: idx + 1,
                source,
            })?;
            convert_row(row, idx + 1, resolver)
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(rows = requests.len(), "loaded batch");
    Ok(requests)
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(
    path: &Path,
    resolver: &CodeResolver,
) -> Result<Vec<TaxRequest>, BatchError> {
    let contents = std::fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents, resolver)
}

// ---------------------------------------------------------------------------
// Evaluation and output
// ---------------------------------------------------------------------------

/// Runs every request and flattens the named outputs into records.
///
/// # Errors
///
/// Stops at the first request whose amounts are out of range, reporting its
/// row.
pub fn evaluate(requests: &[TaxRequest]) -> Result<Vec<BatchRecord>, BatchError> {
    let mut records = Vec::new();
    for (idx, request) in requests.iter().enumerate() {
        let row = idx + 1;
        let result = request
            .calculate()
            .map_err(|source| BatchError::InvalidRequest { row, source })?;
        let tax = result.tax;
        debug!(row, %tax, amount = %result.amount(), "evaluated");
        records.extend(result.outputs.into_iter().map(|output| BatchRecord {
            row,
            tax,
            output: output.name,
            amount: output.amount,
        }));
    }
    Ok(records)
}

/// Writes records as CSV with a header line.
pub fn write_records<W: io::Write>(
    writer: W,
    records: &[BatchRecord],
) -> Result<(), BatchError> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
