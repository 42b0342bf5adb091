//! Layout engine types and configuration.

use hackerland_config::schema::{BarPosition, LayoutMode};
use hackerland_config::HackerlandConfig;

/// Smallest master share `resize_master` can reach.
pub const MIN_MASTER_SPLIT: f64 = 0.1;
/// Largest master share `resize_master` can reach.
pub const MAX_MASTER_SPLIT: f64 = 0.9;

/// Parameters for computing window targets. Holds no per-window state.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    /// Gap in pixels between tiled windows.
    pub gap: u32,
    /// Padding in pixels between the tiling area and the display edge.
    pub outer_padding: u32,
    /// Border inset applied to every tiled rect.
    pub border_width: u32,
    /// Height reserved for the status bar, zero when disabled.
    pub bar_height: u32,
    pub bar_position: BarPosition,
    /// Master column share of the usable width.
    pub master_split: f64,
    pub mode: LayoutMode,
    /// Every visible window covers the whole display.
    pub passthrough: bool,
}

impl LayoutEngine {
    pub fn from_config(config: &HackerlandConfig) -> Self {
        Self {
            gap: config.layout.gap,
            outer_padding: config.layout.outer_padding,
            border_width: config.layout.border_width,
            bar_height: config.bar.reserved_height(),
            bar_position: config.bar.position,
            master_split: clamp_split(config.layout.master_split),
            mode: config.layout.mode,
            passthrough: config.layout.passthrough,
        }
    }

    /// Take spacing and bar settings from `config`, keeping the runtime
    /// mode, split, and passthrough state.
    pub fn apply_config(&mut self, config: &HackerlandConfig) {
        self.gap = config.layout.gap;
        self.outer_padding = config.layout.outer_padding;
        self.border_width = config.layout.border_width;
        self.bar_height = config.bar.reserved_height();
        self.bar_position = config.bar.position;
    }

    /// Adjust the master share, clamped to the allowed range. Returns
    /// whether the value changed.
    pub fn adjust_master_split(&mut self, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let next = clamp_split(self.master_split + delta);
        let changed = next != self.master_split;
        self.master_split = next;
        changed
    }

    /// Name published on the status feed.
    pub fn mode_name(&self) -> &'static str {
        if self.passthrough {
            "passthrough"
        } else {
            self.mode.name()
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::from_config(&HackerlandConfig::default())
    }
}

fn clamp_split(split: f64) -> f64 {
    if split.is_nan() {
        return 0.5;
    }
    split.clamp(MIN_MASTER_SPLIT, MAX_MASTER_SPLIT)
}
