//! Window lifecycle, workspace, and toggle operations on the TilingManager.

use hackerland_common::{Rect, WindowHandle, WindowType};
use hackerland_config::HackerlandConfig;
use tracing::{debug, warn};

use crate::animation::AnimationEngine;
use crate::commands::TilingCommand;
use crate::workspace::Placement;

use super::{Admission, TilingManager};

impl TilingManager {
    /// Classify and admit a window the host reports as ready.
    pub fn add_window(
        &mut self,
        handle: WindowHandle,
        window_type: WindowType,
        name: &str,
    ) -> Admission {
        if self.windows.contains(handle) {
            warn!(window = %handle, "window already tracked");
            return Admission::AlreadyTracked;
        }

        if window_type.is_transient() || self.rules.is_unmanaged(name) {
            debug!(window = %handle, ?window_type, window_name = name, "unmanaged window");
            return Admission::Unmanaged;
        }

        let placement = if window_type.floats_by_default() || self.rules.is_floating(name) {
            Placement::Float
        } else {
            Placement::Tile
        };

        let Some(id) = self.windows.insert(handle, name, window_type, placement) else {
            return Admission::AlreadyTracked;
        };
        debug!(
            window = %handle,
            %id,
            ?placement,
            workspace = self.windows.current_workspace(),
            "window added"
        );

        self.relayout();
        self.status_dirty = true;
        Admission::Managed(id)
    }

    /// Forget a window. Returns false if it was not tracked.
    pub fn remove_window(&mut self, handle: WindowHandle) -> bool {
        let Some((id, _record)) = self.windows.remove(handle) else {
            return false;
        };
        debug!(window = %handle, %id, "window removed");

        if self.active == Some(id) {
            self.active = None;
        }
        self.drag.cancel_for(id);

        self.relayout();
        self.status_dirty = true;
        true
    }

    /// Show workspace `index` (0-based). No-op for the current workspace or
    /// an index out of range.
    pub fn switch_workspace(&mut self, index: usize) -> bool {
        if !self.windows.set_current(index) {
            return false;
        }
        debug!(workspace = index, "switched workspace");
        self.relayout();
        self.status_dirty = true;
        true
    }

    /// Stash the active window or bring it back home.
    pub fn toggle_scratchpad(&mut self) -> bool {
        let Some(id) = self.active else {
            return false;
        };
        if !self.windows.toggle_scratchpad(id) {
            return false;
        }
        debug!(%id, class = ?self.windows.get(id).map(|r| r.class), "scratchpad toggled");
        self.relayout();
        self.status_dirty = true;
        true
    }

    /// Pin the active window to every workspace, or unpin it onto the
    /// current one.
    pub fn toggle_sticky(&mut self) -> bool {
        let Some(id) = self.active else {
            return false;
        };
        if !self.windows.toggle_sticky(id) {
            return false;
        }
        debug!(%id, class = ?self.windows.get(id).map(|r| r.class), "sticky toggled");
        self.relayout();
        self.status_dirty = true;
        true
    }

    pub fn cycle_layout(&mut self) -> bool {
        self.layout.mode = self.layout.mode.next();
        debug!(mode = self.layout.mode.name(), "layout cycled");
        self.relayout();
        self.status_dirty = true;
        true
    }

    /// Shift the master split by `delta`, clamped to its range.
    pub fn resize_master(&mut self, delta: f64) -> bool {
        if !self.layout.adjust_master_split(delta) {
            return false;
        }
        debug!(split = self.layout.master_split, "master split resized");
        self.relayout();
        true
    }

    pub fn toggle_passthrough(&mut self) -> bool {
        self.layout.passthrough = !self.layout.passthrough;
        debug!(passthrough = self.layout.passthrough, "passthrough toggled");
        self.relayout();
        self.status_dirty = true;
        true
    }

    /// Record the focused window. An untracked or absent handle clears focus.
    /// Returns whether the active window changed.
    pub fn focus_changed(&mut self, handle: Option<WindowHandle>) -> bool {
        let next = handle.and_then(|h| self.windows.id_of(h));
        if next == self.active {
            return false;
        }
        self.active = next;
        self.status_dirty = true;
        true
    }

    /// Replace spacing, bar, animation, drag and rule settings.
    ///
    /// The runtime layout mode, master split and passthrough flag survive,
    /// as does the workspace count.
    pub fn reload_config(&mut self, config: &HackerlandConfig) {
        self.layout.apply_config(config);
        self.animation = AnimationEngine::from_config(&config.animation);
        self.drag.apply_config(&config.drag);
        self.rules = config.rules.clone();
        if config.workspaces.count != self.windows.workspace_count() {
            warn!(
                configured = config.workspaces.count,
                active = self.windows.workspace_count(),
                "workspace count changes need a restart"
            );
        }
        debug!("config reloaded");
        self.relayout();
        self.status_dirty = true;
    }

    /// Lay out against a new display area. Returns false if unchanged.
    pub fn set_display_area(&mut self, display: Rect) -> bool {
        if display == self.display {
            return false;
        }
        self.display = display;
        self.relayout();
        true
    }

    /// Execute a runtime command. Returns whether anything changed.
    pub fn execute(&mut self, command: TilingCommand) -> bool {
        match command {
            TilingCommand::SwitchWorkspace(index) => self.switch_workspace(index),
            TilingCommand::CycleLayout => self.cycle_layout(),
            TilingCommand::ResizeMaster(delta) => self.resize_master(delta),
            TilingCommand::ToggleScratchpad => self.toggle_scratchpad(),
            TilingCommand::ToggleSticky => self.toggle_sticky(),
            TilingCommand::TogglePassthrough => self.toggle_passthrough(),
        }
    }
}
