//! Row validation: `RawRow` → `PriceRecord`.
//!
//! Invalid rows are dropped, never repaired or zero-filled. Parsing never
//! fails as a whole; an empty or all-invalid input produces no records.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{PriceRecord, RawRow};

/// Why a row was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropReason {
    /// `Date` absent or blank.
    MissingDate,
    /// `Integer_price` absent, non-numeric, or not finite.
    InvalidPrice,
    /// `Date` present but not a real `D/M/YYYY` calendar date.
    MalformedDate,
}

/// Counts of kept and dropped rows for one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub missing_date: usize,
    pub invalid_price: usize,
    pub malformed_date: usize,
}

impl ParseReport {
    pub fn rows_dropped(&self) -> usize {
        self.missing_date + self.invalid_price + self.malformed_date
    }

    fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::MissingDate => self.missing_date += 1,
            DropReason::InvalidPrice => self.invalid_price += 1,
            DropReason::MalformedDate => self.malformed_date += 1,
        }
    }
}

/// Interpret a price cell as a finite number.
///
/// Surrounding whitespace is ignored. Thousands separators, `NaN` and
/// infinities are rejected.
pub fn parse_price(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Validate a single row.
pub fn parse_row(row: &RawRow) -> Result<PriceRecord, DropReason> {
    let date = match row.date.as_deref() {
        Some(d) if !d.is_empty() => d,
        _ => return Err(DropReason::MissingDate),
    };
    let price = row
        .integer_price
        .as_deref()
        .and_then(parse_price)
        .ok_or(DropReason::InvalidPrice)?;
    PriceRecord::new(date, price).ok_or(DropReason::MalformedDate)
}

/// Validate rows, preserving input order.
pub fn parse_records(rows: &[RawRow]) -> Vec<PriceRecord> {
    parse_records_with_report(rows).0
}

/// Validate rows and report what was dropped.
pub fn parse_records_with_report(rows: &[RawRow]) -> (Vec<PriceRecord>, ParseReport) {
    let mut report = ParseReport {
        rows_read: rows.len(),
        ..ParseReport::default()
    };
    let mut records = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        match parse_row(row) {
            Ok(rec) => records.push(rec),
            Err(reason) => {
                debug!(
                    index,
                    ?reason,
                    date = ?row.date,
                    price = ?row.integer_price,
                    "dropping row"
                );
                report.record_drop(reason);
            }
        }
    }

    report.rows_kept = records.len();
    (records, report)
}
