//! Metric generation and derivation.
//!
//! Nothing in here performs I/O except [`export::write_export`]; every other
//! function takes borrowed inputs and returns fresh values.

/// Dashboard assembly
pub mod dashboard;
/// JSON export
pub mod export;
/// Synthetic stores and monthly snapshots
pub mod generator;
/// Month-over-month comparisons and headline metrics
pub mod metrics;
/// Period selection
pub mod period;
/// Top-N store ranking
pub mod ranking;
/// State rollups
pub mod rollup;
/// Unit scaling and chart series
pub mod units;
