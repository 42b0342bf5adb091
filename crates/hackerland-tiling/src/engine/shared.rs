//! State shared between host callbacks, the animation thread, and the IPC
//! server.

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;

use hackerland_common::{HostError, WindowHandle};
use hackerland_ipc::{IpcCommand, StatusBroadcaster, StatusSnapshot, StatusSource};
use parking_lot::ReentrantMutex;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::commands::TilingCommand;
use crate::host::Host;
use crate::manager::TilingManager;

pub(super) struct Shared {
    /// Reentrant so a host that calls back into the engine from inside
    /// `apply_frame` or `raise_window` does not deadlock. The `RefCell`
    /// borrow is never held across a host call.
    pub(super) state: ReentrantMutex<RefCell<TilingManager>>,
    pub(super) host: Arc<dyn Host>,
    pub(super) status: StatusBroadcaster,
    pub(super) stop: AtomicBool,
    pub(super) tick_ms: AtomicU64,
}

impl Shared {
    /// Run `f` against the manager and publish whatever status it left
    /// pending, all under the lock.
    pub(super) fn mutate<R>(&self, f: impl FnOnce(&mut TilingManager) -> R) -> R {
        let guard = self.state.lock();
        let result = f(&mut guard.borrow_mut());
        self.publish_pending(&guard);
        result
    }

    pub(super) fn read<R>(&self, f: impl FnOnce(&TilingManager) -> R) -> R {
        let guard = self.state.lock();
        let manager = guard.borrow();
        f(&manager)
    }

    /// Publish the pending snapshot, if any. Caller holds the lock.
    pub(super) fn publish_pending(&self, state: &RefCell<TilingManager>) {
        let pending = state.borrow_mut().take_pending_status();
        if let Some(snapshot) = pending {
            let receivers = self.status.publish(snapshot);
            debug!(receivers, "status published");
        }
    }

    /// React to a failed host call. Caller holds the lock with no borrow.
    pub(super) fn host_failed(
        &self,
        state: &RefCell<TilingManager>,
        handle: WindowHandle,
        error: HostError,
    ) {
        match error {
            HostError::StaleHandle(_) => {
                debug!(window = %handle, "stale handle, dropping window");
                state.borrow_mut().remove_window(handle);
            }
            other => warn!(window = %handle, error = %other, "host call failed"),
        }
    }

    /// One animation step: advance, push frames, clean up stale windows.
    pub(super) fn tick(&self, dt: f64) {
        let guard = self.state.lock();
        let frames = guard.borrow_mut().advance(dt);
        for (handle, frame) in frames {
            if let Err(e) = self.host.apply_frame(handle, &frame) {
                if !matches!(e, HostError::StaleHandle(_)) {
                    guard.borrow_mut().frame_rejected(handle);
                }
                self.host_failed(&guard, handle, e);
            }
        }
        self.publish_pending(&guard);
    }
}

impl StatusSource for Shared {
    fn attach(&self) -> (StatusSnapshot, broadcast::Receiver<StatusSnapshot>) {
        let guard = self.state.lock();
        let snapshot = guard.borrow().snapshot();
        (snapshot, self.status.subscribe())
    }

    fn dispatch(&self, command: IpcCommand) {
        debug!(%command, "ipc command");
        self.mutate(|manager| manager.execute(TilingCommand::from(command)));
    }
}
