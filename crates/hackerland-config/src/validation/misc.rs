//! Validation for smaller config sections: workspaces and IPC.

use crate::schema::HackerlandConfig;

use super::helpers::validate_range;

/// Validate workspace constraints.
pub(crate) fn validate_workspaces(errors: &mut Vec<String>, config: &HackerlandConfig) {
    validate_range(errors, "workspaces.count", config.workspaces.count, 1, 10);
}

/// Validate IPC constraints.
pub(crate) fn validate_ipc(errors: &mut Vec<String>, config: &HackerlandConfig) {
    if config.ipc.enabled && config.ipc.socket_path.as_os_str().is_empty() {
        errors.push("ipc.socket_path must not be empty when ipc is enabled".into());
    }
}
