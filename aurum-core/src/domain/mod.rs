//! Domain types for Aurum

pub mod ids;
pub mod record;

pub use ids::DatasetHash;
pub use record::{split_date, PriceRecord, RawRow, DATE_COLUMN, PRICE_COLUMN};
