/// Environment variable lookups
pub mod environment;

/// Settings file loading and validation
pub mod settings;

pub use settings::{AppConfig, load_config};
