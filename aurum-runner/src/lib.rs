//! Aurum Runner — dataset loading, analysis snapshots, presentation and export.
//!
//! This crate builds on `aurum-core` to provide:
//! - Config loading from TOML with defaults for every field
//! - Dataset loading with parse diagnostics and a dataset fingerprint
//! - One immutable `Analysis` snapshot holding every aggregate
//! - A year explorer with a clamped cursor for per-year record tables
//! - Stat cards and chart labels for the presentation layer
//! - JSON and CSV export of snapshots and tables

pub mod analysis;
pub mod config;
pub mod data_loader;
pub mod explorer;
pub mod export;
pub mod present;

pub use analysis::{
    analyze_config_file, analyze_file, analyze_file_or_empty, Analysis, AnalysisError,
    SCHEMA_VERSION,
};
pub use config::{AnalysisConfig, ConfigError, DEFAULT_DATA_PATH, DEFAULT_PREVIEW_ROWS};
pub use data_loader::{load_from_reader, load_records, LoadError, LoadedData};
pub use explorer::{YearCursor, YearExplorer};
pub use export::{
    export_histogram_csv, export_json, export_monthly_csv, export_yearly_csv, import_json,
};
pub use present::{growth_label, stat_cards, thousands_tick, year_tooltip, StatCard};
