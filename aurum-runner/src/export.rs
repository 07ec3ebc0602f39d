//! Export — JSON snapshots and CSV tables.
//!
//! - **JSON**: the full `Analysis`, with a `schema_version` field. Newer
//!   versions than this build understands are rejected on import.
//! - **CSV**: the yearly, monthly and histogram tables for spreadsheets.

use anyhow::{bail, Context, Result};

use aurum_core::stats::{HistogramBin, MonthlyAverage, YearlySummary};

use crate::analysis::{Analysis, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize an `Analysis` to pretty JSON.
pub fn export_json(analysis: &Analysis) -> Result<String> {
    serde_json::to_string_pretty(analysis).context("failed to serialize Analysis to JSON")
}

/// Deserialize an `Analysis` from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<Analysis> {
    let analysis: Analysis =
        serde_json::from_str(json).context("failed to deserialize Analysis from JSON")?;
    if analysis.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            analysis.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(analysis)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Columns: year, records, average, highest, lowest, range, growth_percent
pub fn export_yearly_csv(yearly: &[YearlySummary]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "year",
        "records",
        "average",
        "highest",
        "lowest",
        "range",
        "growth_percent",
    ])?;
    for s in yearly {
        wtr.write_record([
            s.year.to_string(),
            s.count.to_string(),
            format!("{:.0}", s.average),
            format!("{:.2}", s.highest),
            format!("{:.2}", s.lowest),
            format!("{:.2}", s.range),
            format!("{:.1}", s.growth_percent),
        ])?;
    }
    finish(wtr)
}

/// Columns: month, name, records, average
pub fn export_monthly_csv(monthly: &[MonthlyAverage]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["month", "name", "records", "average"])?;
    for m in monthly {
        wtr.write_record([
            m.month.to_string(),
            m.name.clone(),
            m.count.to_string(),
            format!("{:.0}", m.average),
        ])?;
    }
    finish(wtr)
}

/// Columns: range, start, end, count
pub fn export_histogram_csv(bins: &[HistogramBin]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["range", "start", "end", "count"])?;
    for b in bins {
        wtr.write_record([
            b.full_range_label.clone(),
            format!("{:.2}", b.start),
            format!("{:.2}", b.end),
            b.count.to_string(),
        ])?;
    }
    finish(wtr)
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use aurum_core::data::ParseReport;
    use aurum_core::domain::PriceRecord;

    fn analysis() -> Analysis {
        let records = vec![
            PriceRecord::new("1/1/2020", 100_000.0).unwrap(),
            PriceRecord::new("1/7/2020", 120_000.0).unwrap(),
            PriceRecord::new("1/1/2021", 150_000.0).unwrap(),
        ];
        Analysis::compute(&records, ParseReport::default(), &AnalysisConfig::default())
    }

    #[test]
    fn json_roundtrip() {
        let original = analysis();
        let json = export_json(&original).unwrap();
        assert!(json.contains("\"schema_version\": 1"));
        let restored = import_json(&json).unwrap();
        assert_eq!(restored.dataset_hash, original.dataset_hash);
        assert_eq!(restored.summary.count, original.summary.count);
        assert_eq!(restored.yearly, original.yearly);
        assert_eq!(restored.monthly, original.monthly);
        assert_eq!(restored.trend, original.trend);
        let counts = |a: &Analysis| a.histogram.iter().map(|b| b.count).collect::<Vec<_>>();
        assert_eq!(counts(&restored), counts(&original));
    }

    #[test]
    fn json_rejects_newer_schema() {
        let mut future = analysis();
        future.schema_version = SCHEMA_VERSION + 1;
        let json = export_json(&future).unwrap();
        let err = import_json(&json).unwrap_err();
        assert!(err.to_string().contains("unsupported schema version"));
    }

    #[test]
    fn json_rejects_garbage() {
        assert!(import_json("{not json").is_err());
    }

    #[test]
    fn yearly_csv() {
        let csv = export_yearly_csv(&analysis().yearly).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "year,records,average,highest,lowest,range,growth_percent");
        assert_eq!(lines[1], "2020,2,110000,120000.00,100000.00,20000.00,0.0");
        assert_eq!(lines[2], "2021,1,150000,150000.00,150000.00,0.00,36.4");
    }

    #[test]
    fn monthly_csv_has_twelve_rows() {
        let csv = export_monthly_csv(&analysis().monthly).unwrap();
        assert_eq!(csv.lines().count(), 13);
        assert!(csv.contains("1,Jan,2,125000"));
        assert!(csv.contains("2,Feb,0,0"));
    }

    #[test]
    fn histogram_csv_quotes_labels() {
        let csv = export_histogram_csv(&analysis().histogram).unwrap();
        assert_eq!(csv.lines().count(), 13);
        assert!(csv.lines().nth(1).unwrap().starts_with("\"100,000 - 104,166\""));
    }
}
