//! Configuration schema types for Hackerland.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the compositor ships with.

mod animation;
mod layout;
mod system;
mod workspace;

pub use animation::*;
pub use layout::*;
pub use system::*;
pub use workspace::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Hackerland.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HackerlandConfig {
    pub layout: LayoutConfig,
    pub bar: BarConfig,
    pub animation: AnimationConfig,
    pub drag: DragConfig,
    pub workspaces: WorkspacesConfig,
    pub rules: RulesConfig,
    pub ipc: IpcConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config: HackerlandConfig = toml::from_str("").unwrap();
        assert_eq!(config, HackerlandConfig::default());
    }

    #[test]
    fn sections_are_independent() {
        let config: HackerlandConfig = toml::from_str(
            r#"
[layout]
gap = 0

[bar]
position = "bottom"

[workspaces]
count = 9
"#,
        )
        .unwrap();
        assert_eq!(config.layout.gap, 0);
        assert_eq!(config.layout.outer_padding, 20);
        assert_eq!(config.bar.position, BarPosition::Bottom);
        assert_eq!(config.workspaces.count, 9);
        assert_eq!(config.animation, AnimationConfig::default());
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let result: Result<HackerlandConfig, _> = toml::from_str(
            r#"
[layout]
mode = "spiral"
"#,
        );
        assert!(result.is_err());
    }
}
