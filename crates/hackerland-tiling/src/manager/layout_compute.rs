//! Retargeting windows after any change to the visible set.

use tracing::trace;

use crate::animation::AnimatedWindow;

use super::TilingManager;

impl TilingManager {
    /// Recompute targets for the visible windows and park everything else.
    ///
    /// Windows laid out for the first time get a pop-in state. The window
    /// being dragged keeps the target the pointer gave it; a drag whose
    /// window left the visible set is dropped.
    pub(super) fn relayout(&mut self) {
        let visible = self.windows.visible_tiled();
        let targets = self.layout.compute(&visible, self.display);
        let mut dragged = self.drag.dragged_window();
        if let Some(id) = dragged.filter(|id| !visible.contains(id)) {
            self.drag.cancel_for(id);
            dragged = None;
        }

        for (id, rect) in targets {
            if Some(id) == dragged {
                continue;
            }
            let Some(record) = self.windows.get_mut(id) else {
                continue;
            };
            match record.animation.as_mut() {
                Some(animation) => animation.set_target(rect),
                None => {
                    trace!(window = %record.handle, "pop-in");
                    record.animation = Some(AnimatedWindow::pop_in(rect));
                }
            }
        }

        for id in self.windows.hidden() {
            if let Some(animation) = self
                .windows
                .get_mut(id)
                .and_then(|record| record.animation.as_mut())
            {
                animation.hide();
            }
        }
    }
}
