//! Modifier+pointer move and resize of tiled windows.
//!
//! The controller only tracks the session. Hit testing and writing the new
//! target into the window's animation state happen in the manager, which
//! owns both.

mod events;

pub use events::{Modifiers, PointerButton, PointerEvent, PointerOutcome};

use hackerland_common::Rect;
use hackerland_config::schema::{DragConfig, DragModifier};
use tracing::debug;

use crate::workspace::WindowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub window: WindowId,
    pub mode: DragMode,
    /// Pointer position at button-down.
    pub origin: (f64, f64),
    /// Window rect at button-down.
    pub start: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    modifier: DragModifier,
    min_width: f64,
    min_height: f64,
}

impl DragController {
    pub fn from_config(config: &DragConfig) -> Self {
        Self {
            state: DragState::Idle,
            modifier: config.modifier,
            min_width: config.min_width.max(1.0),
            min_height: config.min_height.max(1.0),
        }
    }

    /// Pick up new limits without ending an active session.
    pub fn apply_config(&mut self, config: &DragConfig) {
        self.modifier = config.modifier;
        self.min_width = config.min_width.max(1.0);
        self.min_height = config.min_height.max(1.0);
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn dragged_window(&self) -> Option<WindowId> {
        match self.state {
            DragState::Dragging(session) => Some(session.window),
            DragState::Idle => None,
        }
    }

    /// The drag a button-down would start, if the modifier is held and the
    /// button maps to a mode. Does not hit test.
    pub fn mode_for(&self, button: PointerButton, modifiers: Modifiers) -> Option<DragMode> {
        if self.is_dragging() || !modifiers.has(self.modifier) {
            return None;
        }
        match button {
            PointerButton::Primary => Some(DragMode::Move),
            PointerButton::Secondary => Some(DragMode::Resize),
            _ => None,
        }
    }

    pub fn begin(&mut self, window: WindowId, mode: DragMode, origin: (f64, f64), start: Rect) {
        debug!(%window, ?mode, "drag started");
        self.state = DragState::Dragging(DragSession {
            window,
            mode,
            origin,
            start,
        });
    }

    /// Target rect for the dragged window with the pointer at `(x, y)`.
    pub fn target_at(&self, x: f64, y: f64) -> Option<(WindowId, Rect)> {
        let DragState::Dragging(session) = self.state else {
            return None;
        };
        let dx = x - session.origin.0;
        let dy = y - session.origin.1;
        let start = session.start;
        let rect = match session.mode {
            DragMode::Move => Rect::new(start.x + dx, start.y + dy, start.width, start.height),
            DragMode::Resize => Rect::new(
                start.x,
                start.y,
                (start.width + dx).max(self.min_width),
                (start.height + dy).max(self.min_height),
            ),
        };
        Some((session.window, rect))
    }

    /// End any session. Returns whether one was active.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            debug!("drag ended");
        }
        self.state = DragState::Idle;
        was_dragging
    }

    /// End the session if it targets `window`.
    pub fn cancel_for(&mut self, window: WindowId) -> bool {
        if self.dragged_window() == Some(window) {
            self.state = DragState::Idle;
            true
        } else {
            false
        }
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::from_config(&DragConfig::default())
    }
}
