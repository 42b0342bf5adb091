//! Hackerland configuration system.
//!
//! Provides TOML-based configuration with live reload and full validation.
//! All config sections use sensible defaults so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hackerland_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{HackerlandConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use hackerland_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Creates a default file if none exists. Unlike
/// [`toml_loader::load_from_path`], out-of-range values are an error.
pub fn load_config() -> Result<HackerlandConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<HackerlandConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &HackerlandConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
