//! Pointer routing into the drag controller.

use hackerland_common::Rect;

use crate::drag::{PointerEvent, PointerOutcome};
use crate::workspace::WindowId;

use super::TilingManager;

impl TilingManager {
    /// Feed a pointer event. `Consumed` means the host should not apply its
    /// own handling (focus follows pointer).
    pub fn pointer_event(&mut self, event: PointerEvent) -> PointerOutcome {
        match event {
            PointerEvent::Down {
                x,
                y,
                button,
                modifiers,
            } => {
                let Some(mode) = self.drag.mode_for(button, modifiers) else {
                    return PointerOutcome::Unhandled;
                };
                let Some((id, rect)) = self.hit_test(x, y) else {
                    return PointerOutcome::Unhandled;
                };
                self.drag.begin(id, mode, (x, y), rect);
                PointerOutcome::Consumed
            }
            PointerEvent::Motion { x, y } => {
                let Some((id, rect)) = self.drag.target_at(x, y) else {
                    return PointerOutcome::Unhandled;
                };
                if let Some(animation) = self
                    .windows
                    .get_mut(id)
                    .and_then(|record| record.animation.as_mut())
                {
                    animation.set_target(rect);
                }
                PointerOutcome::Consumed
            }
            PointerEvent::Up { .. } => {
                if self.drag.end() {
                    PointerOutcome::Consumed
                } else {
                    PointerOutcome::Unhandled
                }
            }
        }
    }

    /// The window under layout control whose animated rect contains the
    /// point. The active window wins over overlapping neighbours.
    fn hit_test(&self, x: f64, y: f64) -> Option<(WindowId, Rect)> {
        let visible = self.windows.visible_tiled();
        let active = self.active.filter(|id| visible.contains(id));

        active
            .into_iter()
            .chain(visible.iter().copied())
            .find_map(|id| {
                let rect = self.windows.get(id)?.animation.as_ref()?.current_rect();
                rect.contains(x, y).then_some((id, rect))
            })
    }
}
