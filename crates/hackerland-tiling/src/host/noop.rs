//! Host that accepts everything and reports a fixed display.

use hackerland_common::{HostError, Rect, WindowHandle, WindowType};

use super::Host;
use crate::animation::WindowFrame;

/// Fallback host for headless use. All mutations succeed silently and every
/// window reports [`WindowType::Normal`].
#[derive(Debug, Clone, Copy)]
pub struct NoopHost {
    display: Rect,
}

impl NoopHost {
    pub fn new(display: Rect) -> Self {
        Self { display }
    }
}

impl Default for NoopHost {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 1920.0, 1080.0))
    }
}

impl Host for NoopHost {
    fn display_area(&self) -> Rect {
        self.display
    }

    fn apply_frame(&self, _handle: WindowHandle, _frame: &WindowFrame) -> Result<(), HostError> {
        Ok(())
    }

    fn raise_window(&self, _handle: WindowHandle) -> Result<(), HostError> {
        Ok(())
    }

    fn window_type(&self, _handle: WindowHandle) -> Result<WindowType, HostError> {
        Ok(WindowType::Normal)
    }
}
