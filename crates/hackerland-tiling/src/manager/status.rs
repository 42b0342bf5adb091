//! Status snapshots for the IPC feed.

use hackerland_ipc::StatusSnapshot;

use crate::workspace::WindowClass;

use super::TilingManager;

impl TilingManager {
    /// Top-level state as subscribers see it.
    pub fn snapshot(&self) -> StatusSnapshot {
        let current = self.windows.current_workspace();
        let active = self.active.and_then(|id| self.windows.get(id));

        StatusSnapshot {
            workspace: current + 1,
            windows: self.windows.workspace(current).len(),
            title: active.map(|r| r.title.clone()).unwrap_or_default(),
            sticky: active.is_some_and(|r| r.class == WindowClass::Sticky),
            layout: self.layout.mode_name().to_string(),
        }
    }

    /// The snapshot to publish if anything changed since the last call.
    pub fn take_pending_status(&mut self) -> Option<StatusSnapshot> {
        if !self.status_dirty {
            return None;
        }
        self.status_dirty = false;
        Some(self.snapshot())
    }

    pub fn has_pending_status(&self) -> bool {
        self.status_dirty
    }
}
