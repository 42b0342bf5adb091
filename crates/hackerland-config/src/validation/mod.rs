//! Full configuration validation.
//!
//! Validates all numeric ranges. Each domain has its own submodule; this
//! orchestrator calls them all and collects errors into a single
//! `ConfigError`.

mod animation;
mod helpers;
mod layout;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::HackerlandConfig;
use hackerland_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HackerlandConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);
    animation::validate_animation(&mut errors, config);
    animation::validate_drag(&mut errors, config);
    misc::validate_workspaces(&mut errors, config);
    misc::validate_ipc(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
