//! Per-year aggregates and year-over-year growth.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::PriceRecord;
use crate::stats::{mean, round_half_up, round_to_tenth};

/// Summary of one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: i32,
    pub count: usize,
    /// Mean price rounded to a whole number.
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
    pub range: f64,
    /// Change of `average` against the preceding year, in percent, one decimal.
    pub growth_percent: f64,
}

/// Trend chart point: a year's average and its growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearOverYearPoint {
    pub year: i32,
    pub average_price: f64,
    pub growth_percent: f64,
}

/// Group records by year, years ascending, records in input order.
pub fn group_by_year(records: &[PriceRecord]) -> BTreeMap<i32, Vec<&PriceRecord>> {
    let mut groups: BTreeMap<i32, Vec<&PriceRecord>> = BTreeMap::new();
    for rec in records {
        groups.entry(rec.year).or_default().push(rec);
    }
    groups
}

/// Percentage change from `previous` to `current`, one decimal.
///
/// 0.0 when there is no previous year or its average is exactly zero.
pub fn growth_percent(previous: Option<f64>, current: f64) -> f64 {
    match previous {
        Some(prev) if prev != 0.0 => round_to_tenth((current - prev) / prev * 100.0),
        _ => 0.0,
    }
}

/// One summary per distinct year, ascending.
pub fn yearly_summaries(records: &[PriceRecord]) -> Vec<YearlySummary> {
    let mut previous: Option<f64> = None;
    group_by_year(records)
        .into_iter()
        .map(|(year, group)| {
            let prices: Vec<f64> = group.iter().map(|r| r.price).collect();
            let average = round_half_up(mean(&prices));
            let highest = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let lowest = prices.iter().copied().fold(f64::INFINITY, f64::min);
            let growth = growth_percent(previous, average);
            previous = Some(average);
            YearlySummary {
                year,
                count: prices.len(),
                average,
                highest,
                lowest,
                range: highest - lowest,
                growth_percent: growth,
            }
        })
        .collect()
}

/// Year averages with growth, for trend charts.
pub fn year_over_year_series(records: &[PriceRecord]) -> Vec<YearOverYearPoint> {
    yearly_summaries(records)
        .into_iter()
        .map(|s| YearOverYearPoint {
            year: s.year,
            average_price: s.average,
            growth_percent: s.growth_percent,
        })
        .collect()
}
