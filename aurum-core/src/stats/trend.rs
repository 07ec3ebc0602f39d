//! Time-ordered, down-sampled price series for the trend chart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::domain::PriceRecord;

/// Keep every fifth record on the trend chart.
pub const DEFAULT_TREND_STRIDE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Original date string.
    pub full_date: String,
    /// Short month and year, e.g. `"Jan 2020"`.
    pub month_year: String,
    pub timestamp: NaiveDate,
    pub price: f64,
    pub year: i32,
}

/// Records sorted by timestamp. Records on the same day keep input order.
pub fn sorted_by_time(records: &[PriceRecord]) -> Vec<&PriceRecord> {
    let mut sorted: Vec<&PriceRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.timestamp);
    sorted
}

/// Time-ordered series keeping positions `0, stride, 2*stride, …`.
pub fn trend_series(records: &[PriceRecord], stride: NonZeroUsize) -> Vec<TrendPoint> {
    sorted_by_time(records)
        .into_iter()
        .step_by(stride.get())
        .map(|r| TrendPoint {
            full_date: r.date.clone(),
            month_year: r.timestamp.format("%b %Y").to_string(),
            timestamp: r.timestamp,
            price: r.price,
            year: r.year,
        })
        .collect()
}
