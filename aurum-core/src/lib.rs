//! Aurum Core — gold price records and the statistics pipeline.
//!
//! This crate contains the computational heart of the gold price deck:
//! - Domain types (raw rows, validated price records, dataset hash)
//! - CSV ingestion and row validation
//! - Descriptive statistics (mean, median, mode, variance, standard deviation)
//! - Aggregates: yearly summaries, monthly averages, histograms, density bins,
//!   year-over-year growth, trend series
//!
//! Nothing here keeps state between calls. Running the pipeline twice on the
//! same rows yields identical output.

pub mod data;
pub mod domain;
pub mod format;
pub mod stats;
