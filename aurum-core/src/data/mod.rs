//! Data ingestion and row validation

pub mod ingest;
pub mod parse;
pub mod schema;

pub use ingest::{CsvIngestor, RawTable};
pub use parse::{
    parse_price, parse_records, parse_records_with_report, parse_row, DropReason, ParseReport,
};
pub use schema::{PriceColumns, PriceSchema, SchemaError};

/// Errors reading a dataset. Row-level validation never produces one.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}
