//! Dataset loading for the runner.
//!
//! Reads the CSV once, validates every row and fingerprints the result. A
//! file that cannot be read is a `LoadError`; malformed rows inside a readable
//! file are dropped and only show up in the `ParseReport`.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use aurum_core::data::{
    parse_records_with_report, CsvIngestor, DataError, ParseReport, RawTable,
};
use aurum_core::domain::{DatasetHash, PriceRecord};

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset not found: {path}")]
    NotFound { path: String },

    #[error("data error: {0}")]
    Data(#[from] DataError),
}

/// Validated records of one load, with provenance.
#[derive(Debug, Clone)]
pub struct LoadedData {
    /// Records in file order.
    pub records: Vec<PriceRecord>,
    pub report: ParseReport,
    pub dataset_hash: DatasetHash,
    /// Where the data came from (a path, or a label for in-memory sources).
    pub source: PathBuf,
}

impl LoadedData {
    fn from_table(table: RawTable, source: PathBuf) -> Self {
        let (records, report) = parse_records_with_report(&table.rows);
        let dataset_hash = DatasetHash::of_records(&records);

        info!(
            source = %source.display(),
            rows = report.rows_read,
            kept = report.rows_kept,
            dropped = report.rows_dropped(),
            hash = %dataset_hash,
            "loaded gold price dataset"
        );
        if report.rows_dropped() > 0 {
            warn!(
                missing_date = report.missing_date,
                invalid_price = report.invalid_price,
                malformed_date = report.malformed_date,
                "excluded malformed rows"
            );
        }

        Self {
            records,
            report,
            dataset_hash,
            source,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load and validate the dataset at `path`.
pub fn load_records(path: &Path) -> Result<LoadedData, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.display().to_string(),
        });
    }
    let table = CsvIngestor::new().read_path(path)?;
    Ok(LoadedData::from_table(table, path.to_path_buf()))
}

/// Load and validate CSV from an in-memory or streamed source.
pub fn load_from_reader<R: Read>(reader: R, label: &str) -> Result<LoadedData, LoadError> {
    let table = CsvIngestor::new().read(reader)?;
    Ok(LoadedData::from_table(table, PathBuf::from(label)))
}
