use serde::{Deserialize, Serialize};
use std::fmt;

use super::PriceRecord;

/// Deterministic dataset hash (BLAKE3 over the validated record sequence).
///
/// Two loads of the same file produce the same hash, so a snapshot can be
/// matched to the data it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetHash(pub String);

impl DatasetHash {
    /// Hash records in their given order.
    ///
    /// Covers the verbatim date string and the price bits, which together
    /// determine every other record field.
    pub fn of_records(records: &[PriceRecord]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(records.len() as u64).to_le_bytes());
        for rec in records {
            hasher.update(&(rec.date.len() as u64).to_le_bytes());
            hasher.update(rec.date.as_bytes());
            hasher.update(&rec.price.to_le_bytes());
        }
        Self(hasher.finalize().to_hex().to_string())
    }
}

impl fmt::Display for DatasetHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
