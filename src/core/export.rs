//! JSON export of the current dashboard figures.

use crate::core::dashboard::Dashboard;
use crate::core::metrics::KeyMetrics;
use crate::errors::Result;
use crate::models::{MonthlySnapshot, StateRollup, TopStore};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The downloadable document: headline metrics and the three main collections, verbatim.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardExport<'a> {
    /// Headline cards
    pub key_metrics: &'a KeyMetrics,
    /// Snapshots inside the selected period
    pub monthly_data: &'a [MonthlySnapshot],
    /// One rollup per state
    pub state_wise_data: &'a [StateRollup],
    /// Ranked stores
    pub top_stores: &'a [TopStore],
}

impl<'a> DashboardExport<'a> {
    /// Borrows the exported collections from a built dashboard.
    #[must_use]
    pub fn from_dashboard(dashboard: &'a Dashboard) -> Self {
        Self {
            key_metrics: &dashboard.key_metrics,
            monthly_data: &dashboard.monthly_data,
            state_wise_data: &dashboard.state_rollups,
            top_stores: &dashboard.top_stores,
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}

/// File name for an export made on `date`, e.g. `CFO_Dashboard_2026-10-18.json`.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("CFO_Dashboard_{}.json", date.format("%Y-%m-%d"))
}

/// Writes the export into `directory`, creating it if needed, and returns the file path.
///
/// An export from the same day is overwritten.
pub fn write_export(
    directory: &Path,
    export: &DashboardExport<'_>,
    date: NaiveDate,
) -> Result<PathBuf> {
    let json = export.to_json()?;
    std::fs::create_dir_all(directory)?;

    let path = directory.join(export_file_name(date));
    debug!("Writing {} bytes of export to {:?}", json.len(), path);
    std::fs::write(&path, json)?;
    info!("Dashboard exported to {:?}", path);

    Ok(path)
}
