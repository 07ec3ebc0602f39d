//! Price records — raw CSV rows and their validated form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column holding the `D/M/YYYY` date string.
pub const DATE_COLUMN: &str = "Date";

/// Column holding the price.
pub const PRICE_COLUMN: &str = "Integer_price";

/// An untyped row as it arrives from the dataset.
///
/// Both cells are kept as text. A missing column or an empty cell is `None`;
/// nothing here has been validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "Integer_price", default)]
    pub integer_price: Option<String>,
}

impl RawRow {
    pub fn new(date: impl Into<String>, integer_price: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            integer_price: Some(integer_price.into()),
        }
    }
}

/// A validated gold price observation.
///
/// `price` is always finite. `date` is the original string, kept verbatim for
/// display; `year`, `month`, `day` and `timestamp` are derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: String,
    pub price: f64,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub timestamp: NaiveDate,
}

impl PriceRecord {
    /// Build a record from an already-validated price and `D/M/YYYY` date.
    ///
    /// Returns `None` when the date does not split into day, month and year or
    /// does not name a real calendar day, or when the price is not finite.
    pub fn new(date: &str, price: f64) -> Option<Self> {
        if !price.is_finite() {
            return None;
        }
        let (day, month, year) = split_date(date)?;
        let timestamp = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self {
            date: date.to_string(),
            price,
            year,
            month,
            day,
            timestamp,
        })
    }
}

/// Split a day-first `D/M/YYYY` date into `(day, month, year)`.
///
/// Each part is trimmed before parsing. Anything other than exactly three
/// numeric parts, or a month outside 1–12, yields `None`.
pub fn split_date(date: &str) -> Option<(u32, u32, i32)> {
    let mut parts = date.split('/');
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    if parts.next().is_some() || !(1..=12).contains(&month) {
        return None;
    }
    Some((day, month, year))
}
