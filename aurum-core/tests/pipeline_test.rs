//! End-to-end tests of the core pipeline against the frozen CSV fixture.
//!
//! The fixture holds 108 valid weekly-ish observations for 2020–2022 plus a
//! blank line and three malformed rows (missing date, `N/A` price, empty
//! price).

use std::path::PathBuf;

use aurum_core::data::{parse_records_with_report, CsvIngestor};
use aurum_core::domain::{DatasetHash, PriceRecord, RawRow};
use aurum_core::stats::{
    density_bins, histogram, mean, median, mode, monthly_averages, prices, std_dev, variance,
    year_over_year_series, yearly_summaries, DescriptiveStats, DEFAULT_DENSITY_BINS,
    DEFAULT_HISTOGRAM_BINS,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/gold_price_sample.csv")
}

fn load_fixture() -> Vec<PriceRecord> {
    let table = CsvIngestor::new().read_path(&fixture_path()).unwrap();
    parse_records_with_report(&table.rows).0
}

#[test]
fn fixture_drops_malformed_rows() {
    let table = CsvIngestor::new().read_path(&fixture_path()).unwrap();
    assert_eq!(table.rows.len(), 111);
    let (records, report) = parse_records_with_report(&table.rows);
    assert_eq!(records.len(), 108);
    assert_eq!(report.missing_date, 1);
    assert_eq!(report.invalid_price, 2);
    assert_eq!(report.malformed_date, 0);
}

#[test]
fn fixture_yearly_summaries() {
    let records = load_fixture();
    let summaries = yearly_summaries(&records);
    let years: Vec<i32> = summaries.iter().map(|s| s.year).collect();
    assert_eq!(years, vec![2020, 2021, 2022]);
    assert_eq!(summaries.iter().map(|s| s.count).sum::<usize>(), records.len());
    assert_eq!(summaries[0].lowest, 104_000.0);
    assert_eq!(summaries[2].highest, 204_169.0);
    assert_eq!(summaries[0].growth_percent, 0.0);
    assert_eq!(summaries[0].average, 117_810.0);
    assert_eq!(summaries[1].average, 146_608.0);
    assert_eq!(summaries[2].average, 184_060.0);
    assert_eq!(summaries[1].growth_percent, 24.4);
    assert_eq!(summaries[2].growth_percent, 25.5);
    for s in &summaries {
        assert_eq!(s.range, s.highest - s.lowest);
        assert!(s.lowest <= s.average && s.average <= s.highest);
    }
}

#[test]
fn fixture_monthly_counts_cover_all_records() {
    let records = load_fixture();
    let months = monthly_averages(&records);
    assert_eq!(months.len(), 12);
    assert_eq!(months.iter().map(|m| m.count).sum::<usize>(), records.len());
}

#[test]
fn fixture_bins_cover_all_prices() {
    let p = prices(&load_fixture());
    let hist = histogram(&p, DEFAULT_HISTOGRAM_BINS);
    assert_eq!(hist.len(), 12);
    assert_eq!(hist.iter().map(|b| b.count).sum::<usize>(), p.len());
    assert_eq!(hist[0].range_label, "104k");
    assert!(hist.last().unwrap().count >= 1);

    let density = density_bins(&p, DEFAULT_DENSITY_BINS);
    assert_eq!(density.len(), 40);
    assert_eq!(density.iter().map(|b| b.count).sum::<usize>(), p.len());
}

#[test]
fn documented_statistics_examples() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(mean(&[5.0]), 5.0);
    assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
    assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0, 3.0]), 1.0);

    let v = variance(&[2.0, 4.0, 6.0], 4.0);
    assert!((v - 2.667).abs() < 1e-3);
    assert!((std_dev(v) - 1.633).abs() < 1e-3);
}

#[test]
fn documented_yearly_example() {
    let rows = vec![
        RawRow::new("1/1/2020", "100000"),
        RawRow::new("1/7/2020", "120000"),
        RawRow::new("1/1/2021", "150000"),
    ];
    let (records, _) = parse_records_with_report(&rows);
    let series = year_over_year_series(&records);
    assert_eq!(series[0].average_price, 110_000.0);
    assert_eq!(series[0].growth_percent, 0.0);
    assert_eq!(series[1].average_price, 150_000.0);
    assert_eq!(series[1].growth_percent, 36.4);
}

#[test]
fn empty_dataset_never_fails() {
    let table = CsvIngestor::new().read("Date,Integer_price\n".as_bytes()).unwrap();
    let (records, report) = parse_records_with_report(&table.rows);
    assert!(records.is_empty());
    assert_eq!(report.rows_read, 0);

    let p = prices(&records);
    assert_eq!(DescriptiveStats::compute(&p), DescriptiveStats::default());
    assert!(yearly_summaries(&records).is_empty());
    assert_eq!(monthly_averages(&records).len(), 12);
    assert!(histogram(&p, DEFAULT_HISTOGRAM_BINS).is_empty());
    assert!(density_bins(&p, DEFAULT_DENSITY_BINS).is_empty());
}

#[test]
fn fixture_hash_is_stable_across_loads() {
    assert_eq!(
        DatasetHash::of_records(&load_fixture()),
        DatasetHash::of_records(&load_fixture())
    );
}
