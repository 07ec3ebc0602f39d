use csv::ByteRecord;

use crate::domain::{DATE_COLUMN, PRICE_COLUMN};

/// Expected header layout for the gold price table.
pub struct PriceSchema;

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceColumns {
    pub date: usize,
    pub price: usize,
}

impl PriceSchema {
    /// Columns every dataset must carry. Additional columns are ignored.
    pub const REQUIRED: [&'static str; 2] = [DATE_COLUMN, PRICE_COLUMN];

    /// Find the required columns in a header row.
    ///
    /// Names are compared after trimming surrounding whitespace. A header cell
    /// that is not valid UTF-8 never matches but is otherwise harmless. The
    /// first matching column wins.
    pub fn locate(headers: &ByteRecord) -> Result<PriceColumns, SchemaError> {
        Ok(PriceColumns {
            date: Self::position(headers, DATE_COLUMN)?,
            price: Self::position(headers, PRICE_COLUMN)?,
        })
    }

    fn position(headers: &ByteRecord, name: &str) -> Result<usize, SchemaError> {
        headers
            .iter()
            .position(|h| std::str::from_utf8(h).map(str::trim) == Ok(name))
            .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required column: {0}")]
    MissingColumn(String),
}
