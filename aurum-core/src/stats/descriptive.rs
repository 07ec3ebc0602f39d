//! Descriptive statistics — pure functions over price slices.
//!
//! Every function returns 0.0 for an empty slice instead of failing, so
//! callers never need to guard against degenerate data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arithmetic mean. 0.0 for an empty slice.
pub fn mean(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    numbers.iter().sum::<f64>() / numbers.len() as f64
}

/// Median of the values.
///
/// Middle element for odd length, average of the two middle elements for even
/// length, 0.0 for an empty slice. The input is not reordered.
pub fn median(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Most frequent value.
///
/// Ties go to the first value to reach the winning count while scanning in
/// input order; a later value reaching the same count does not displace it.
/// 0.0 for an empty slice.
pub fn mode(numbers: &[f64]) -> f64 {
    let Some(&first) = numbers.first() else {
        return 0.0;
    };
    let mut frequency: HashMap<u64, usize> = HashMap::new();
    let mut max_freq = 0;
    let mut mode = first;

    for &n in numbers {
        let count = frequency.entry(value_key(n)).or_insert(0);
        *count += 1;
        if *count > max_freq {
            max_freq = *count;
            mode = n;
        }
    }
    mode
}

/// Population variance about a precomputed mean (divisor N). 0.0 for an empty
/// slice.
pub fn variance(numbers: &[f64], mean: f64) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    numbers.iter().map(|n| (n - mean).powi(2)).sum::<f64>() / numbers.len() as f64
}

/// Standard deviation from a variance.
pub fn std_dev(variance: f64) -> f64 {
    variance.sqrt()
}

/// Frequency key for a value; `0.0` and `-0.0` count as the same value.
fn value_key(n: f64) -> u64 {
    if n == 0.0 {
        0.0_f64.to_bits()
    } else {
        n.to_bits()
    }
}

/// Summary of a price set, as shown on the statistical summary slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Compute all measures. An empty slice yields all zeros.
    pub fn compute(prices: &[f64]) -> Self {
        let mean = mean(prices);
        let variance = variance(prices, mean);
        Self {
            count: prices.len(),
            mean,
            median: median(prices),
            mode: mode(prices),
            variance,
            std_dev: std_dev(variance),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
