//! Settings read from environment variables (or `.env`).

use crate::errors::{Error, Result};
use std::env::VarError;
use std::path::PathBuf;

/// Variable naming the settings file
pub const CONFIG_PATH_VAR: &str = "DASHBOARD_CONFIG";
/// Variable overriding the generator seed
pub const SEED_VAR: &str = "DASHBOARD_SEED";
/// Settings file used when [`CONFIG_PATH_VAR`] is unset
pub const DEFAULT_CONFIG_PATH: &str = "dashboard.toml";

/// Path of the settings file, from `DASHBOARD_CONFIG` or the default.
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_VAR)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Seed override from `DASHBOARD_SEED`, if set.
///
/// # Errors
/// Returns [`Error::EnvVar`] if the variable is not valid unicode and
/// [`Error::Config`] if it is not an unsigned integer.
pub fn seed_override() -> Result<Option<u64>> {
    seed_from_var(std::env::var(SEED_VAR))
}

/// Interprets the result of looking up the seed variable; absent counts as unset.
///
/// # Errors
/// Returns [`Error::EnvVar`] for a non-unicode value and [`Error::Config`] for
/// a value that is not an unsigned integer.
pub fn seed_from_var(lookup: std::result::Result<String, VarError>) -> Result<Option<u64>> {
    match lookup {
        Ok(raw) => parse_seed(Some(&raw)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Parses a raw seed value; blank counts as unset.
///
/// # Errors
/// Returns [`Error::Config`] if the value is not an unsigned integer.
pub fn parse_seed(raw: Option<&str>) -> Result<Option<u64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|e| Error::Config {
            message: format!("{SEED_VAR} must be an unsigned integer, got {value:?}: {e}"),
        }),
    }
}
