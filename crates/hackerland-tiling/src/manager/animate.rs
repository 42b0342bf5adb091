//! Per-tick animation advance.

use hackerland_common::WindowHandle;

use crate::animation::WindowFrame;

use super::TilingManager;

impl TilingManager {
    /// Step every animated window by `dt` seconds (clamped to the
    /// configured maximum) and return the frames the host should apply, in
    /// window-id order.
    pub fn advance(&mut self, dt: f64) -> Vec<(WindowHandle, WindowFrame)> {
        let dt = self.animation.clamp_dt(dt);
        let mut frames = Vec::new();

        for id in self.windows.ids() {
            let Some(record) = self.windows.get_mut(id) else {
                continue;
            };
            let Some(animation) = record.animation.as_mut() else {
                continue;
            };
            animation.step(&self.animation, dt);
            if let Some(frame) = animation.take_frame() {
                frames.push((record.handle, frame));
            }
        }

        frames
    }

    /// Mark the last frame for `handle` as not applied so the next
    /// `advance` sends it again.
    pub fn frame_rejected(&mut self, handle: WindowHandle) {
        let Some(id) = self.windows.id_of(handle) else {
            return;
        };
        if let Some(animation) = self.windows.get_mut(id).and_then(|r| r.animation.as_mut()) {
            animation.forget_applied();
        }
    }

    /// True when no window has anywhere left to go.
    pub fn is_settled(&self) -> bool {
        self.windows
            .ids()
            .into_iter()
            .filter_map(|id| self.windows.get(id)?.animation.as_ref())
            .all(|animation| animation.is_settled())
    }
}
