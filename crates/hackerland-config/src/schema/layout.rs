//! Tiling layout and status bar configuration types.

use serde::{Deserialize, Serialize};

/// Tiling algorithm applied to the visible windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    #[default]
    MasterStack,
    Monocle,
    Grid,
}

impl LayoutMode {
    /// Next mode in the keybinding cycle.
    pub fn next(self) -> Self {
        match self {
            LayoutMode::MasterStack => LayoutMode::Monocle,
            LayoutMode::Monocle => LayoutMode::Grid,
            LayoutMode::Grid => LayoutMode::MasterStack,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutMode::MasterStack => "master-stack",
            LayoutMode::Monocle => "monocle",
            LayoutMode::Grid => "grid",
        }
    }
}

/// Window arrangement configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between tiled windows in pixels (valid range: 0-100).
    pub gap: u32,
    /// Screen-edge padding in pixels (valid range: 0-200).
    pub outer_padding: u32,
    /// Border inset applied to every tiled rect (valid range: 0-20).
    pub border_width: u32,
    /// Master column share of the usable width (valid range: 0.1-0.9).
    pub master_split: f64,
    /// Initial layout mode.
    pub mode: LayoutMode,
    /// Start with every window covering the full display.
    pub passthrough: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 10,
            outer_padding: 20,
            border_width: 2,
            master_split: 0.5,
            mode: LayoutMode::MasterStack,
            passthrough: false,
        }
    }
}

/// Screen edge reserved for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BarPosition {
    #[default]
    Top,
    Bottom,
}

/// Status bar reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    pub enabled: bool,
    /// Reserved height in pixels (valid range: 0-200).
    pub height: u32,
    pub position: BarPosition,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            height: 42,
            position: BarPosition::Top,
        }
    }
}

impl BarConfig {
    /// Height actually reserved, zero when the bar is disabled.
    pub fn reserved_height(&self) -> u32 {
        if self.enabled {
            self.height
        } else {
            0
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
