//! Analysis snapshot — every aggregate the deck consumes, computed in one pass.
//!
//! Three entry points:
//! - `analyze_config_file()`: reads a TOML config, then does `analyze_file()`.
//! - `analyze_file()`: loads the configured CSV, then computes.
//! - `Analysis::compute()`: takes pre-loaded records, no I/O.
//!
//! A snapshot is immutable once built. Reloading means building a new one.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use aurum_core::data::ParseReport;
use aurum_core::domain::{DatasetHash, PriceRecord};
use aurum_core::stats::{
    density_bins, histogram, monthly_averages, prices, trend_series, year_over_year_series,
    yearly_summaries, DensityBin, DescriptiveStats, HistogramBin, MonthlyAverage, TrendPoint,
    YearOverYearPoint, YearlySummary,
};

use crate::config::{AnalysisConfig, ConfigError};
use crate::data_loader::{load_records, LoadError, LoadedData};

/// Errors from the analysis runner.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("data error: {0}")]
    Data(#[from] LoadError),
}

/// Current schema version for exported snapshots.
pub const SCHEMA_VERSION: u32 = 1;

/// All derived aggregates of one dataset load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub dataset_hash: DatasetHash,
    pub parse_report: ParseReport,
    pub summary: DescriptiveStats,
    pub yearly: Vec<YearlySummary>,
    pub year_over_year: Vec<YearOverYearPoint>,
    pub monthly: Vec<MonthlyAverage>,
    pub histogram: Vec<HistogramBin>,
    pub density: Vec<DensityBin>,
    pub trend: Vec<TrendPoint>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Analysis {
    /// Compute every aggregate from validated records.
    ///
    /// `parse_report` is carried through for diagnostics only.
    pub fn compute(
        records: &[PriceRecord],
        parse_report: ParseReport,
        config: &AnalysisConfig,
    ) -> Self {
        let p = prices(records);
        Self {
            schema_version: SCHEMA_VERSION,
            dataset_hash: DatasetHash::of_records(records),
            parse_report,
            summary: DescriptiveStats::compute(&p),
            yearly: yearly_summaries(records),
            year_over_year: year_over_year_series(records),
            monthly: monthly_averages(records),
            histogram: histogram(&p, config.histogram_bins),
            density: density_bins(&p, config.density_bins),
            trend: trend_series(records, config.trend_stride),
        }
    }

    /// Compute from a completed load.
    pub fn from_loaded(loaded: &LoadedData, config: &AnalysisConfig) -> Self {
        Self::compute(&loaded.records, loaded.report.clone(), config)
    }

    /// The "no data" snapshot: zeros, twelve empty months, no bins.
    pub fn empty(config: &AnalysisConfig) -> Self {
        Self::compute(&[], ParseReport::default(), config)
    }

    pub fn record_count(&self) -> usize {
        self.summary.count
    }

    pub fn has_data(&self) -> bool {
        !self.summary.is_empty()
    }

    /// Summary for a single year, if present.
    pub fn year(&self, year: i32) -> Option<&YearlySummary> {
        self.yearly.iter().find(|s| s.year == year)
    }
}

/// Load the configured dataset and compute its snapshot.
pub fn analyze_file(config: &AnalysisConfig) -> Result<(LoadedData, Analysis), AnalysisError> {
    let loaded = load_records(&config.data_path)?;
    let analysis = Analysis::from_loaded(&loaded, config);
    Ok((loaded, analysis))
}

/// Read the TOML config at `config_path`, then load and analyze its dataset.
pub fn analyze_config_file(
    config_path: &Path,
) -> Result<(AnalysisConfig, LoadedData, Analysis), AnalysisError> {
    let config = AnalysisConfig::from_file(config_path)?;
    let (loaded, analysis) = analyze_file(&config)?;
    Ok((config, loaded, analysis))
}

/// Like `analyze_file`, but a dataset that cannot be loaded yields the empty
/// snapshot instead of an error.
pub fn analyze_file_or_empty(config: &AnalysisConfig) -> Analysis {
    match analyze_file(config) {
        Ok((_, analysis)) => analysis,
        Err(e) => {
            warn!(error = %e, "dataset unavailable, using empty snapshot");
            Analysis::empty(config)
        }
    }
}
