//! Host that records every call, for tests and the headless CLI.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

use hackerland_common::{HostError, Rect, WindowHandle, WindowType};
use parking_lot::Mutex;

use super::Host;
use crate::animation::WindowFrame;

/// In-memory stand-in for a compositor.
///
/// Frames and raises are appended to logs. Handles marked stale fail every
/// call with [`HostError::StaleHandle`], the way a real compositor reports a
/// window destroyed between events. While marked unavailable every call fails
/// with [`HostError::Unavailable`].
#[derive(Debug)]
pub struct RecordingHost {
    display: Mutex<Rect>,
    frames: Mutex<Vec<(WindowHandle, WindowFrame)>>,
    raised: Mutex<Vec<WindowHandle>>,
    types: Mutex<HashMap<WindowHandle, WindowType>>,
    stale: Mutex<HashSet<WindowHandle>>,
    unavailable: AtomicBool,
}

impl RecordingHost {
    pub fn new(display: Rect) -> Self {
        Self {
            display: Mutex::new(display),
            frames: Mutex::new(Vec::new()),
            raised: Mutex::new(Vec::new()),
            types: Mutex::new(HashMap::new()),
            stale: Mutex::new(HashSet::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn set_display_area(&self, display: Rect) {
        *self.display.lock() = display;
    }

    /// Type reported by `window_type` for `handle` (default `Normal`).
    pub fn set_window_type(&self, handle: WindowHandle, window_type: WindowType) {
        self.types.lock().insert(handle, window_type);
    }

    pub fn mark_stale(&self, handle: WindowHandle) {
        self.stale.lock().insert(handle);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn frames(&self) -> Vec<(WindowHandle, WindowFrame)> {
        self.frames.lock().clone()
    }

    /// Drain the frame log.
    pub fn take_frames(&self) -> Vec<(WindowHandle, WindowFrame)> {
        std::mem::take(&mut *self.frames.lock())
    }

    pub fn last_frame(&self, handle: WindowHandle) -> Option<WindowFrame> {
        self.frames
            .lock()
            .iter()
            .rev()
            .find(|(h, _)| *h == handle)
            .map(|(_, frame)| *frame)
    }

    pub fn raised(&self) -> Vec<WindowHandle> {
        self.raised.lock().clone()
    }

    fn check(&self, handle: WindowHandle) -> Result<(), HostError> {
        if self.stale.lock().contains(&handle) {
            Err(HostError::StaleHandle(handle))
        } else if self.unavailable.load(Ordering::SeqCst) {
            Err(HostError::Unavailable("recording host offline".into()))
        } else {
            Ok(())
        }
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 1920.0, 1080.0))
    }
}

impl Host for RecordingHost {
    fn display_area(&self) -> Rect {
        *self.display.lock()
    }

    fn apply_frame(&self, handle: WindowHandle, frame: &WindowFrame) -> Result<(), HostError> {
        self.check(handle)?;
        self.frames.lock().push((handle, *frame));
        Ok(())
    }

    fn raise_window(&self, handle: WindowHandle) -> Result<(), HostError> {
        self.check(handle)?;
        self.raised.lock().push(handle);
        Ok(())
    }

    fn window_type(&self, handle: WindowHandle) -> Result<WindowType, HostError> {
        self.check(handle)?;
        Ok(self
            .types
            .lock()
            .get(&handle)
            .copied()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(x: f64) -> WindowFrame {
        WindowFrame {
            rect: Rect::new(x, 0.0, 10.0, 10.0),
            scale: 1.0,
            opacity: 1.0,
            visible: true,
        }
    }

    #[test]
    fn records_frames_in_order() {
        let host = RecordingHost::default();
        host.apply_frame(WindowHandle(1), &frame(1.0)).unwrap();
        host.apply_frame(WindowHandle(2), &frame(2.0)).unwrap();
        host.apply_frame(WindowHandle(1), &frame(3.0)).unwrap();

        assert_eq!(host.frames().len(), 3);
        assert_eq!(host.last_frame(WindowHandle(1)).unwrap().rect.x, 3.0);
        assert_eq!(host.take_frames().len(), 3);
        assert!(host.frames().is_empty());
    }

    #[test]
    fn stale_handles_fail_everything() {
        let host = RecordingHost::default();
        host.mark_stale(WindowHandle(7));
        assert_eq!(
            host.apply_frame(WindowHandle(7), &frame(0.0)),
            Err(HostError::StaleHandle(WindowHandle(7)))
        );
        assert!(host.raise_window(WindowHandle(7)).is_err());
        assert!(host.window_type(WindowHandle(7)).is_err());
        assert!(host.frames().is_empty());
    }

    #[test]
    fn unavailable_host_records_nothing() {
        let host = RecordingHost::default();
        host.set_unavailable(true);
        assert!(matches!(
            host.apply_frame(WindowHandle(1), &frame(0.0)),
            Err(HostError::Unavailable(_))
        ));
        host.set_unavailable(false);
        host.apply_frame(WindowHandle(1), &frame(0.0)).unwrap();
        assert_eq!(host.frames().len(), 1);
    }

    #[test]
    fn window_types_default_to_normal() {
        let host = RecordingHost::default();
        host.set_window_type(WindowHandle(2), WindowType::Dialog);
        assert_eq!(host.window_type(WindowHandle(1)), Ok(WindowType::Normal));
        assert_eq!(host.window_type(WindowHandle(2)), Ok(WindowType::Dialog));
    }
}
