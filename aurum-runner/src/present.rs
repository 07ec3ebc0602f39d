//! Presentation adapters — engine output formatted for display.
//!
//! Nothing here computes statistics; it only rounds and labels values the
//! engine already produced.

use serde::{Deserialize, Serialize};

use aurum_core::format::{format_currency, format_number, group_thousands};
use aurum_core::stats::{round_half_up, DescriptiveStats, YearOverYearPoint};

/// One card on the statistical summary slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

impl StatCard {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// The six summary cards, in slide order.
///
/// With no prices every card reads `"0"`.
pub fn stat_cards(stats: &DescriptiveStats) -> Vec<StatCard> {
    const LABELS: [&str; 6] = ["Records", "Mean Price", "Median", "Mode", "Std Dev", "Variance"];

    if stats.is_empty() {
        return LABELS
            .iter()
            .map(|label| StatCard::new(label, "0".to_string()))
            .collect();
    }

    let values = [
        group_thousands(stats.count as i64),
        format_currency(round_half_up(stats.mean)),
        format_currency(round_half_up(stats.median)),
        format_currency(round_half_up(stats.mode)),
        format!("±{}", format_number(round_half_up(stats.std_dev))),
        format_number(round_half_up(stats.variance)),
    ];
    LABELS
        .iter()
        .zip(values)
        .map(|(label, value)| StatCard::new(label, value))
        .collect()
}

/// Growth with a direction marker, e.g. `"▲ 36.4%"` or `"▼ 2.1%"`.
pub fn growth_label(growth_percent: f64) -> String {
    if growth_percent >= 0.0 {
        format!("▲ {growth_percent:.1}%")
    } else {
        format!("▼ {:.1}%", growth_percent.abs())
    }
}

/// Axis tick in thousands: `104000.0` → `"104k"`.
pub fn thousands_tick(value: f64) -> String {
    format!("{}k", round_half_up(value / 1000.0) as i64)
}

/// Tooltip lines for a year on the growth chart.
pub fn year_tooltip(point: &YearOverYearPoint) -> [String; 3] {
    [
        format!("Year {}", point.year),
        format!("Avg: {}", format_currency(point.average_price)),
        format!("{} Growth", growth_label(point.growth_percent)),
    ]
}
