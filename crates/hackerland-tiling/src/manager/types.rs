//! Core types and constructors for TilingManager.

use hackerland_common::{Rect, WindowHandle};
use hackerland_config::schema::{LayoutMode, RulesConfig};
use hackerland_config::HackerlandConfig;

use crate::animation::AnimationEngine;
use crate::drag::DragController;
use crate::layout::LayoutEngine;
use crate::workspace::{WindowClass, WindowId, WindowSet};

/// Result of offering a new window to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Tracked under the given id.
    Managed(WindowId),
    /// Bars, backgrounds, menus and tooltips: raise it, don't track it.
    Unmanaged,
    /// The handle was already tracked; nothing changed.
    AlreadyTracked,
}

/// All tiling state: window sets, layout and animation parameters, the
/// drag session, focus, and the pending status flag.
///
/// Not thread-safe by itself; [`crate::Engine`] wraps it in the shared lock.
pub struct TilingManager {
    pub(super) windows: WindowSet,
    pub(super) layout: LayoutEngine,
    pub(super) animation: AnimationEngine,
    pub(super) drag: DragController,
    pub(super) rules: RulesConfig,
    pub(super) display: Rect,
    /// Focused window, if the host reported one we track.
    pub(super) active: Option<WindowId>,
    /// Set when a change should reach status subscribers.
    pub(super) status_dirty: bool,
}

impl TilingManager {
    /// Build from config. The workspace count is fixed here for the
    /// lifetime of the manager.
    pub fn new(config: &HackerlandConfig, display: Rect) -> Self {
        Self {
            windows: WindowSet::new(config.workspaces.count),
            layout: LayoutEngine::from_config(config),
            animation: AnimationEngine::from_config(&config.animation),
            drag: DragController::from_config(&config.drag),
            rules: config.rules.clone(),
            display,
            active: None,
            status_dirty: false,
        }
    }

    // -- Accessors --

    pub fn current_workspace(&self) -> usize {
        self.windows.current_workspace()
    }

    pub fn workspace_count(&self) -> usize {
        self.windows.workspace_count()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn windows(&self) -> &WindowSet {
        &self.windows
    }

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.mode
    }

    pub fn master_split(&self) -> f64 {
        self.layout.master_split
    }

    pub fn is_passthrough(&self) -> bool {
        self.layout.passthrough
    }

    pub fn display_area(&self) -> Rect {
        self.display
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn active_window(&self) -> Option<WindowHandle> {
        self.active
            .and_then(|id| self.windows.get(id))
            .map(|record| record.handle)
    }

    pub fn class_of(&self, handle: WindowHandle) -> Option<WindowClass> {
        let id = self.windows.id_of(handle)?;
        self.windows.get(id).map(|record| record.class)
    }

    /// Where layout (or a drag) is currently sending the window.
    pub fn target_of(&self, handle: WindowHandle) -> Option<Rect> {
        self.animation_of(handle).map(|a| a.target_rect())
    }

    /// The window's animated rect right now.
    pub fn current_rect_of(&self, handle: WindowHandle) -> Option<Rect> {
        self.animation_of(handle).map(|a| a.current_rect())
    }

    pub fn is_hiding(&self, handle: WindowHandle) -> bool {
        self.animation_of(handle).is_some_and(|a| a.is_hiding())
    }

    /// Handles under layout control, in layout order.
    pub fn visible_windows(&self) -> Vec<WindowHandle> {
        self.windows
            .visible_tiled()
            .into_iter()
            .filter_map(|id| self.windows.get(id).map(|r| r.handle))
            .collect()
    }

    fn animation_of(&self, handle: WindowHandle) -> Option<&crate::animation::AnimatedWindow> {
        let id = self.windows.id_of(handle)?;
        self.windows.get(id)?.animation.as_ref()
    }
}
