//! Equal-width binning over the observed price range.
//!
//! Bin `i` covers `[min + i*width, min + (i+1)*width)` where
//! `width = (max - min) / bin_count`. The last bin is closed on the right so
//! a price equal to the maximum is counted, which makes the counts of every
//! binning sum to the number of prices.
//!
//! When all prices are equal the width is zero and every price lands in the
//! last bin. An empty price slice produces no bins.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::format::group_thousands;
use crate::stats::round_half_up;

/// Bins on the price distribution chart.
pub const DEFAULT_HISTOGRAM_BINS: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(n) => n,
    None => unreachable!(),
};

/// Bins on the frequency density curve.
pub const DEFAULT_DENSITY_BINS: NonZeroUsize = match NonZeroUsize::new(40) {
    Some(n) => n,
    None => unreachable!(),
};

/// One equal-width bucket: numeric edges and the number of prices inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Histogram bar for the price distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    /// Lower edge in thousands, e.g. `"104k"`.
    pub range_label: String,
    pub count: usize,
    /// Both edges with grouping, e.g. `"104,000 - 127,250"`.
    pub full_range_label: String,
}

/// Point on the frequency density curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityBin {
    pub start: f64,
    pub end: f64,
    /// Rounded bin midpoint.
    pub midpoint_price: f64,
    pub count: usize,
    /// Edges in thousands, e.g. `"104k-110k"`.
    pub label: String,
}

/// Partition `[min, max]` of `prices` into `bin_count` equal-width buckets.
pub fn bucketize(prices: &[f64], bin_count: NonZeroUsize) -> Vec<Bucket> {
    let Some((min, max)) = price_range(prices) else {
        return Vec::new();
    };
    let n = bin_count.get();
    let width = (max - min) / n as f64;

    let mut buckets: Vec<Bucket> = (0..n)
        .map(|i| Bucket {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    let last = n - 1;
    for &p in prices {
        // First bucket whose upper edge is above p; the last bucket takes the rest.
        let idx = buckets[..last]
            .iter()
            .position(|b| p < b.end)
            .unwrap_or(last);
        buckets[idx].count += 1;
    }
    buckets
}

/// Histogram with labelled bins.
pub fn histogram(prices: &[f64], bin_count: NonZeroUsize) -> Vec<HistogramBin> {
    bucketize(prices, bin_count)
        .into_iter()
        .map(|b| HistogramBin {
            start: b.start,
            end: b.end,
            range_label: format!("{}k", (b.start / 1000.0).floor() as i64),
            count: b.count,
            full_range_label: format!(
                "{} - {}",
                group_thousands(b.start.floor() as i64),
                group_thousands(b.end.floor() as i64)
            ),
        })
        .collect()
}

/// Fine-grained bins for a continuous-looking frequency curve.
pub fn density_bins(prices: &[f64], bin_count: NonZeroUsize) -> Vec<DensityBin> {
    bucketize(prices, bin_count)
        .into_iter()
        .map(|b| DensityBin {
            start: b.start,
            end: b.end,
            midpoint_price: round_half_up((b.start + b.end) / 2.0),
            count: b.count,
            label: format!(
                "{}k-{}k",
                round_half_up(b.start / 1000.0) as i64,
                round_half_up(b.end / 1000.0) as i64
            ),
        })
        .collect()
}

fn price_range(prices: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = prices.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
    )
}
