use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by `amount` on every side, keeping at least `min` per dimension.
    pub fn inset(&self, amount: f64, min: f64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - 2.0 * amount).max(min),
            height: (self.height - 2.0 * amount).max(min),
        }
    }

    /// A rect of the given size sharing this rect's center.
    pub fn centered(&self, width: f64, height: f64) -> Self {
        let (cx, cy) = self.center();
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }
}

/// Opaque window identity handed out by the compositor host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowHandle(pub u64);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Window role as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    #[default]
    Normal,
    Dialog,
    Utility,
    Menu,
    Tooltip,
}

impl WindowType {
    /// Transient popups that are never tracked, only raised.
    pub fn is_transient(self) -> bool {
        matches!(self, WindowType::Menu | WindowType::Tooltip)
    }

    /// Types that float by default instead of being tiled.
    pub fn floats_by_default(self) -> bool {
        matches!(self, WindowType::Dialog | WindowType::Utility)
    }
}
