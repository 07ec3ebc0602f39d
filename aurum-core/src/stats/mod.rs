//! Aggregation engine — descriptive statistics and derived aggregates.
//!
//! Everything here is a pure function of its input. Empty or degenerate input
//! resolves to zeros or empty collections, never an error.

pub mod binning;
pub mod descriptive;
pub mod monthly;
pub mod trend;
pub mod yearly;

pub use binning::{
    bucketize, density_bins, histogram, Bucket, DensityBin, HistogramBin, DEFAULT_DENSITY_BINS,
    DEFAULT_HISTOGRAM_BINS,
};
pub use descriptive::{mean, median, mode, std_dev, variance, DescriptiveStats};
pub use monthly::{monthly_averages, MonthlyAverage, MONTH_NAMES};
pub use trend::{sorted_by_time, trend_series, TrendPoint, DEFAULT_TREND_STRIDE};
pub use yearly::{
    group_by_year, growth_percent, year_over_year_series, yearly_summaries, YearOverYearPoint,
    YearlySummary,
};

use crate::domain::PriceRecord;

/// Round to the nearest integer, halves toward positive infinity
/// (`2.5 → 3`, `-2.5 → -2`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Project records onto their prices.
pub fn prices(records: &[PriceRecord]) -> Vec<f64> {
    records.iter().map(|r| r.price).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_up_rounding() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(110_000.0), 110_000.0);
    }

    #[test]
    fn tenth_rounding() {
        assert_eq!(round_to_tenth(36.363_636), 36.4);
        assert_eq!(round_to_tenth(-4.44), -4.4);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }

    #[test]
    fn prices_projection_keeps_order() {
        let records = vec![
            PriceRecord::new("2/1/2020", 2.0).unwrap(),
            PriceRecord::new("1/1/2020", 1.0).unwrap(),
        ];
        assert_eq!(prices(&records), vec![2.0, 1.0]);
    }
}
