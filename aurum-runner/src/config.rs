//! Analysis configuration, loadable from TOML.
//!
//! Every field has a default matching the deck, so an empty file (or no file)
//! is a valid configuration:
//!
//! ```toml
//! data_path = "data/gold_price_data.csv"
//! histogram_bins = 12
//! density_bins = 40
//! trend_stride = 5
//! preview_rows = 3
//! ```

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use aurum_core::stats::{DEFAULT_DENSITY_BINS, DEFAULT_HISTOGRAM_BINS, DEFAULT_TREND_STRIDE};

pub const DEFAULT_DATA_PATH: &str = "data/gold_price_data.csv";
pub const DEFAULT_PREVIEW_ROWS: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Parameters of one analysis run.
///
/// Bin counts and the trend stride are non-zero by type; a `0` in TOML is
/// rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// CSV file with `Date` and `Integer_price` columns.
    pub data_path: PathBuf,
    /// Bars on the price distribution chart.
    pub histogram_bins: NonZeroUsize,
    /// Points on the frequency density curve.
    pub density_bins: NonZeroUsize,
    /// Keep every Nth time-ordered record on the trend chart.
    pub trend_stride: NonZeroUsize,
    /// Records shown at each end of a year in the explorer.
    pub preview_rows: usize,
}

impl AnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            density_bins: DEFAULT_DENSITY_BINS,
            trend_stride: DEFAULT_TREND_STRIDE,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = AnalysisConfig::from_toml("").unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.histogram_bins.get(), 12);
        assert_eq!(config.density_bins.get(), 40);
        assert_eq!(config.trend_stride.get(), 5);
        assert_eq!(config.preview_rows, 3);
        assert_eq!(config.data_path, PathBuf::from("data/gold_price_data.csv"));
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let config =
            AnalysisConfig::from_toml("histogram_bins = 20\ndata_path = \"x.csv\"").unwrap();
        assert_eq!(config.histogram_bins.get(), 20);
        assert_eq!(config.density_bins.get(), 40);
        assert_eq!(config.data_path, PathBuf::from("x.csv"));
    }

    #[test]
    fn zero_bins_rejected() {
        let err = AnalysisConfig::from_toml("density_bins = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(AnalysisConfig::from_toml("bins = 12").is_err());
    }

    #[test]
    fn toml_roundtrip() {
        let config = AnalysisConfig::default().with_data_path("gold.csv");
        let text = config.to_toml().unwrap();
        assert_eq!(AnalysisConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = AnalysisConfig::from_file(Path::new("/nonexistent/aurum.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
