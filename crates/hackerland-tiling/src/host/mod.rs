//! Contract with the compositor host.
//!
//! The core never touches display protocol objects. Everything it needs
//! from the compositor goes through [`Host`], and everything the compositor
//! reports comes in through [`crate::Engine`] methods.

mod noop;
mod recording;

pub use noop::NoopHost;
pub use recording::RecordingHost;

use hackerland_common::{HostError, Rect, WindowHandle, WindowType};

use crate::animation::WindowFrame;

/// Compositor-side operations the tiling core relies on.
pub trait Host: Send + Sync {
    /// Area of the active output in compositor coordinates.
    fn display_area(&self) -> Rect;

    /// Move/resize/fade a window. `StaleHandle` means the window is gone.
    fn apply_frame(&self, handle: WindowHandle, frame: &WindowFrame) -> Result<(), HostError>;

    fn raise_window(&self, handle: WindowHandle) -> Result<(), HostError>;

    fn window_type(&self, handle: WindowHandle) -> Result<WindowType, HostError>;

    /// Run `f` inside whatever lock the host requires for window
    /// modifications. The animation thread calls this once per tick.
    fn invoke_under_lock(&self, f: &mut dyn FnMut()) {
        f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_invoke_under_lock_runs_closure() {
        let host = NoopHost::default();
        let mut calls = 0;
        host.invoke_under_lock(&mut || calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn host_is_object_safe() {
        let host: Box<dyn Host> = Box::new(NoopHost::new(Rect::new(0.0, 0.0, 640.0, 480.0)));
        assert_eq!(host.display_area().width, 640.0);
    }
}
