//! Calendar-month averages across all years.

use serde::{Deserialize, Serialize};

use crate::domain::PriceRecord;
use crate::stats::round_half_up;

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Average price of one calendar month, pooled over every year.
///
/// `average` is 0.0 when `count` is 0; `count` tells that case apart from a
/// true zero average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAverage {
    pub month: u32,
    pub name: String,
    /// Mean price rounded to a whole number.
    pub average: f64,
    pub count: usize,
}

impl MonthlyAverage {
    pub fn has_data(&self) -> bool {
        self.count > 0
    }
}

/// Always exactly twelve entries, January first.
pub fn monthly_averages(records: &[PriceRecord]) -> Vec<MonthlyAverage> {
    let mut sums = [0.0_f64; 12];
    let mut counts = [0_usize; 12];
    for rec in records {
        let idx = (rec.month as usize).saturating_sub(1).min(11);
        sums[idx] += rec.price;
        counts[idx] += 1;
    }

    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| MonthlyAverage {
            month: i as u32 + 1,
            name: (*name).to_string(),
            average: if counts[i] > 0 {
                round_half_up(sums[i] / counts[i] as f64)
            } else {
                0.0
            },
            count: counts[i],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(date: &str, price: f64) -> PriceRecord {
        PriceRecord::new(date, price).unwrap()
    }

    #[test]
    fn always_twelve_months() {
        let records = vec![
            rec("1/1/2020", 100.0),
            rec("1/3/2020", 300.0),
            rec("1/11/2021", 1100.0),
        ];
        let months = monthly_averages(&records);
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].name, "Jan");
        assert_eq!(months[11].name, "Dec");
        assert_eq!(months.iter().filter(|m| m.has_data()).count(), 3);
        assert_eq!(months[1].average, 0.0);
        assert_eq!(months[1].count, 0);
    }

    #[test]
    fn pools_across_years() {
        let records = vec![rec("5/6/2020", 100.0), rec("5/6/2021", 201.0)];
        let june = &monthly_averages(&records)[5];
        assert_eq!(june.month, 6);
        assert_eq!(june.count, 2);
        assert_eq!(june.average, 151.0);
    }

    #[test]
    fn zero_average_with_data_is_distinguishable() {
        let months = monthly_averages(&[rec("1/4/2020", 0.0)]);
        assert_eq!(months[3].average, 0.0);
        assert!(months[3].has_data());
        assert!(!months[4].has_data());
    }

    #[test]
    fn empty_records_still_twelve() {
        let months = monthly_averages(&[]);
        assert_eq!(months.len(), 12);
        assert!(months.iter().all(|m| m.average == 0.0 && m.count == 0));
    }
}
