use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ByteRecord;

use crate::data::schema::{PriceColumns, PriceSchema};
use crate::data::DataError;
use crate::domain::RawRow;

/// Raw rows read from a CSV table, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

/// CSV ingestor for the gold price table.
///
/// Expects a header row with at least `Date` and `Integer_price`. Blank lines
/// are skipped, extra columns ignored, and short rows yield `None` cells.
/// Only the two required cells of each row are decoded, so bytes in other
/// columns never cost a row.
pub struct CsvIngestor {
    delimiter: u8,
}

impl CsvIngestor {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Use a delimiter other than `,`.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read a CSV file from disk.
    pub fn read_path(&self, path: &Path) -> Result<RawTable, DataError> {
        let file = File::open(path).map_err(|e| DataError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        self.read(file)
    }

    /// Read CSV from any byte source.
    ///
    /// A source with no header at all (empty input) is an empty table, not an
    /// error. A header lacking a required column is an error.
    pub fn read<R: Read>(&self, source: R) -> Result<RawTable, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .delimiter(self.delimiter)
            .from_reader(source);

        let headers = reader.byte_headers()?.clone();
        if headers.is_empty() {
            return Ok(RawTable::default());
        }
        let columns = PriceSchema::locate(&headers)?;

        let mut table = RawTable::default();
        let mut record = ByteRecord::new();
        while reader.read_byte_record(&mut record)? {
            table.rows.push(raw_row(&record, columns));
        }
        Ok(table)
    }
}

impl Default for CsvIngestor {
    fn default() -> Self {
        Self::new()
    }
}

fn raw_row(record: &ByteRecord, columns: PriceColumns) -> RawRow {
    RawRow {
        date: text_cell(record, columns.date),
        integer_price: text_cell(record, columns.price),
    }
}

/// A non-empty UTF-8 cell. Missing, empty and undecodable cells are `None`.
fn text_cell(record: &ByteRecord, index: usize) -> Option<String> {
    let text = std::str::from_utf8(record.get(index)?).ok()?;
    (!text.is_empty()).then(|| text.to_string())
}
