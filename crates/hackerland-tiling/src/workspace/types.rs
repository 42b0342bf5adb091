//! Window identity and classification.

use std::fmt;

use hackerland_common::{WindowHandle, WindowType};

use crate::animation::AnimatedWindow;

/// Stable internal id, assigned on admission and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which set a tracked window belongs to. Exactly one at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowClass {
    /// In the ordered list of a workspace.
    Tiled(usize),
    /// Positioned by the host, never by layout.
    Floating,
    /// Stashed away; `home` is the workspace it came from.
    Scratchpad { home: usize },
    /// Tiled on whichever workspace is current.
    Sticky,
}

/// Where a newly admitted window goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Tile,
    Float,
}

#[derive(Debug, Clone)]
pub struct WindowRecord {
    pub handle: WindowHandle,
    pub title: String,
    pub window_type: WindowType,
    pub class: WindowClass,
    /// Present once the window has been laid out at least once.
    pub animation: Option<AnimatedWindow>,
}
