//! The running tiling core: a [`TilingManager`] behind one reentrant lock,
//! driven by host callbacks, the `hackerland-anim` thread and the IPC feed.

mod animator;
mod shared;


use std::cell::RefCell;
use std::ops::Deref;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use hackerland_common::{HackerlandError, HostError, WindowHandle, WindowType};
use hackerland_config::HackerlandConfig;
use hackerland_ipc::{IpcServer, StatusBroadcaster, StatusSnapshot, StatusSource};
use parking_lot::ReentrantMutex;
use tracing::{debug, error, info, warn};

use crate::commands::TilingCommand;
use crate::drag::{PointerEvent, PointerOutcome};
use crate::host::Host;
use crate::manager::{Admission, TilingManager};

use shared::Shared;

/// Cloneable handle to the engine's shared state.
///
/// Every method is safe to call from any thread, including from inside a
/// host call made by the engine itself.
#[derive(Clone)]
pub struct EngineHandle {
    shared: Arc<Shared>,
}

impl EngineHandle {
    // -- Control API --

    pub fn switch_workspace(&self, index: usize) -> bool {
        self.shared.mutate(|m| m.switch_workspace(index))
    }

    pub fn cycle_layout(&self) -> bool {
        self.shared.mutate(|m| m.cycle_layout())
    }

    pub fn resize_master(&self, delta: f64) -> bool {
        self.shared.mutate(|m| m.resize_master(delta))
    }

    pub fn toggle_scratchpad(&self) -> bool {
        self.shared.mutate(|m| m.toggle_scratchpad())
    }

    pub fn toggle_sticky(&self) -> bool {
        self.shared.mutate(|m| m.toggle_sticky())
    }

    pub fn toggle_passthrough(&self) -> bool {
        self.shared.mutate(|m| m.toggle_passthrough())
    }

    pub fn execute(&self, command: TilingCommand) -> bool {
        debug!(?command, "executing command");
        self.shared.mutate(|m| m.execute(command))
    }

    /// Swap in a new configuration. The animation period takes effect on
    /// the next tick.
    pub fn reload_config(&self, config: &HackerlandConfig) {
        self.shared
            .tick_ms
            .store(config.animation.tick_ms.clamp(1, 100), Ordering::Relaxed);
        self.shared.mutate(|m| m.reload_config(config));
        info!("configuration applied");
    }

    // -- Host notifications --

    /// A window finished mapping. Tracked and unmanaged windows are raised.
    pub fn window_ready(
        &self,
        handle: WindowHandle,
        window_type: WindowType,
        name: &str,
    ) -> Admission {
        let shared = &self.shared;
        let guard = shared.state.lock();
        let admission = guard.borrow_mut().add_window(handle, window_type, name);

        if matches!(admission, Admission::Managed(_) | Admission::Unmanaged) {
            if let Err(e) = shared.host.raise_window(handle) {
                shared.host_failed(&guard, handle, e);
            }
        }

        shared.publish_pending(&guard);
        admission
    }

    /// Take over a window that already existed when the engine started,
    /// asking the host for its type. `None` if the host no longer knows it.
    pub fn adopt_window(&self, handle: WindowHandle, name: &str) -> Option<Admission> {
        let window_type = match self.shared.host.window_type(handle) {
            Ok(window_type) => window_type,
            Err(HostError::StaleHandle(_)) => {
                debug!(window = %handle, "window vanished before adoption");
                return None;
            }
            Err(e) => {
                warn!(window = %handle, error = %e, "window type unavailable, tiling it");
                WindowType::Normal
            }
        };
        Some(self.window_ready(handle, window_type, name))
    }

    pub fn window_destroyed(&self, handle: WindowHandle) -> bool {
        self.shared.mutate(|m| m.remove_window(handle))
    }

    pub fn focus_changed(&self, handle: Option<WindowHandle>) -> bool {
        self.shared.mutate(|m| m.focus_changed(handle))
    }

    pub fn pointer_event(&self, event: PointerEvent) -> PointerOutcome {
        self.shared.mutate(|m| m.pointer_event(event))
    }

    /// Re-read the display area from the host and lay out against it.
    pub fn display_changed(&self) -> bool {
        let display = self.shared.host.display_area();
        self.shared.mutate(|m| m.set_display_area(display))
    }

    // -- Animation --

    /// Run one animation step on the calling thread. The animation thread
    /// does this every `animation.tick_ms`.
    pub fn tick(&self, dt: f64) {
        self.shared.tick(dt);
    }

    // -- Queries --

    pub fn snapshot(&self) -> StatusSnapshot {
        self.shared.read(|m| m.snapshot())
    }

    pub fn current_workspace(&self) -> usize {
        self.shared.read(|m| m.current_workspace())
    }

    /// Read arbitrary manager state under the lock.
    pub fn inspect<R>(&self, f: impl FnOnce(&TilingManager) -> R) -> R {
        self.shared.read(f)
    }

    /// Receive every status snapshot published from now on.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<StatusSnapshot> {
        self.shared.status.subscribe()
    }
}

/// Owner of the engine threads. Dereferences to [`EngineHandle`] for the
/// control API; dropping it shuts everything down.
pub struct Engine {
    handle: EngineHandle,
    animator: Option<JoinHandle<()>>,
    ipc: Option<IpcServer>,
}

impl Engine {
    /// Build the manager from `config`, bind the IPC socket if enabled, and
    /// start the animation thread.
    pub fn start(config: &HackerlandConfig, host: Arc<dyn Host>) -> Result<Self, HackerlandError> {
        let area = host.display_area();
        let shared = Arc::new(Shared {
            state: ReentrantMutex::new(RefCell::new(TilingManager::new(config, area))),
            host,
            status: StatusBroadcaster::new(),
            stop: AtomicBool::new(false),
            tick_ms: AtomicU64::new(config.animation.tick_ms.clamp(1, 100)),
        });

        let ipc = if config.ipc.enabled {
            let source: Arc<dyn StatusSource> = shared.clone();
            Some(IpcServer::start(
                config.ipc.socket_path.clone(),
                config.ipc.format,
                source,
            )?)
        } else {
            None
        };

        let animator = animator::spawn(Arc::clone(&shared))?;

        info!(
            workspaces = config.workspaces.count,
            width = area.width,
            height = area.height,
            ipc = config.ipc.enabled,
            "tiling engine started"
        );

        Ok(Self {
            handle: EngineHandle { shared },
            animator: Some(animator),
            ipc,
        })
    }

    pub fn handle(&self) -> EngineHandle {
        self.handle.clone()
    }

    pub fn socket_path(&self) -> Option<&std::path::Path> {
        self.ipc.as_ref().map(IpcServer::path)
    }

    /// Stop the animation thread and the IPC server. Idempotent.
    pub fn shutdown(&mut self) {
        let Some(animator) = self.animator.take() else {
            return;
        };
        self.handle.shared.stop.store(true, Ordering::Release);
        if animator.join().is_err() {
            error!("animation thread panicked");
        }
        if let Some(mut ipc) = self.ipc.take() {
            ipc.stop();
        }
        info!("tiling engine stopped");
    }
}

impl Deref for Engine {
    type Target = EngineHandle;

    fn deref(&self) -> &EngineHandle {
        &self.handle
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.shutdown();
    }
}
