//! Dashboard settings loaded from a TOML file.
//!
//! Every field has a default, so a missing file or a partial one is fine:
//!
//! ```toml
//! [generator]
//! seed = 42
//!
//! [dashboard]
//! period_months = 6
//! top_stores = 10
//! states = ["Kerala", "tamil nadu"]
//! heat_metric = "revenue"
//!
//! [export]
//! directory = "exports"
//! ```

use crate::core::dashboard::DashboardOptions;
use crate::core::generator::MONTHS_IN_WINDOW;
use crate::core::ranking::TOP_STORE_MULTIPLIERS;
use crate::core::rollup::HeatMetric;
use crate::errors::{Error, Result};
use crate::models::IndianState;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Configuration structure representing the whole settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Data generation settings
    pub generator: GeneratorConfig,
    /// Dashboard view settings
    pub dashboard: DashboardConfig,
    /// Export destination
    pub export: ExportConfig,
}

/// Controls the synthetic data source
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible output; time-seeded when absent
    pub seed: Option<u64>,
}

/// Controls what the dashboard shows
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Trailing months in the monthly views
    pub period_months: usize,
    /// Length of the top store ranking
    pub top_stores: usize,
    /// State names to show in the state view, matched case-insensitively; empty means all
    pub states: Vec<String>,
    /// Figure the state map is shaded by
    pub heat_metric: HeatMetric,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let options = DashboardOptions::default();
        Self {
            period_months: options.period_months,
            top_stores: options.top_store_count,
            states: Vec::new(),
            heat_metric: options.heat_metric,
        }
    }
}

impl DashboardConfig {
    /// Parses the configured state names.
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the first entry that is not a state.
    pub fn selected_states(&self) -> Result<Vec<IndianState>> {
        self.states
            .iter()
            .map(|name| {
                name.parse::<IndianState>().map_err(|e| Error::Config {
                    message: format!("Invalid entry in dashboard.states: {e}"),
                })
            })
            .collect()
    }

    /// Options for [`crate::core::dashboard::Dashboard::build`].
    ///
    /// # Errors
    /// Returns [`Error::Config`] if a configured state name is unknown.
    pub fn options(&self) -> Result<DashboardOptions> {
        Ok(DashboardOptions {
            period_months: self.period_months,
            top_store_count: self.top_stores,
            states: self.selected_states()?,
            heat_metric: self.heat_metric,
        })
    }
}

/// Where exports are written
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output directory, created on demand
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("exports"),
        }
    }
}

impl AppConfig {
    /// Checks values serde cannot: period and ranking bounds, state names.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when `period_months` is outside 1 to 12,
    /// `top_stores` is outside 1 to 10, or a state name is unknown.
    pub fn validate(&self) -> Result<()> {
        let max_months = MONTHS_IN_WINDOW as usize;
        if !(1..=max_months).contains(&self.dashboard.period_months) {
            return Err(Error::Config {
                message: format!(
                    "period_months must be between 1 and {max_months}, got {}",
                    self.dashboard.period_months
                ),
            });
        }

        let max_top = TOP_STORE_MULTIPLIERS.len();
        if !(1..=max_top).contains(&self.dashboard.top_stores) {
            return Err(Error::Config {
                message: format!(
                    "top_stores must be between 1 and {max_top}, got {}",
                    self.dashboard.top_stores
                ),
            });
        }

        self.dashboard.selected_states()?;
        Ok(())
    }
}

/// Parses and validates settings from TOML text
///
/// # Errors
/// Returns an error if the TOML syntax is invalid, a field has the wrong type,
/// or validation fails.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse dashboard settings: {e}"),
    })?;
    config.validate()?;
    Ok(config)
}

/// Loads settings from a TOML file
///
/// # Arguments
/// * `path` - Path to the settings file
///
/// # Returns
/// * `Ok(AppConfig)` - Parsed settings, or defaults when the file does not exist
/// * `Err(Error)` - The file exists but could not be read, parsed or validated
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);

    if !path_ref.exists() {
        warn!("No settings file at {:?}, using defaults", path_ref);
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}
