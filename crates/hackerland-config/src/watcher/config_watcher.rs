//! Debounced config file watcher.
//!
//! Watches the parent directory of the config file (editors often save by
//! write-then-rename, which replaces the inode) and filters events down to
//! the one file name we care about.

use hackerland_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// Default quiet period before a burst of file events becomes one signal.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a config file for changes and sends notifications.
pub struct ConfigWatcher {
    path: PathBuf,
    debounce: Duration,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if path.file_name().is_none() {
            return Err(ConfigError::WatchError(format!(
                "{} does not name a file",
                path.display()
            )));
        }
        if !path.exists() {
            warn!(path = %path.display(), "config file does not exist yet, watching for creation");
        }

        Ok(Self {
            path,
            debounce: DEFAULT_DEBOUNCE,
        })
    }

    /// Override the debounce window.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Watch the config file, sending `()` on `tx` once per debounced burst
    /// of modifications.
    ///
    /// Runs until the underlying notify channel closes.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let watch_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!(path = %self.path.display(), "starting config file watcher");

        // Bridges the sync notify callback into async.
        let (notify_tx, notify_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if is_config_event(&event, &file_name) {
                        debug!("config file change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        // `watcher` must outlive the loop or the callback stops firing.
        debounce_signals(notify_rx, self.debounce, tx).await;
        drop(watcher);
        Ok(())
    }
}

/// True for create/modify events that touch `file_name`.
pub(crate) fn is_config_event(event: &Event, file_name: &OsString) -> bool {
    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
        return false;
    }
    event
        .paths
        .iter()
        .any(|p| p.file_name().is_some_and(|n| n == file_name.as_os_str()))
}

/// Coalesce bursts on `rx` into single sends on `tx`.
///
/// Every signal restarts the quiet period. Returns when `rx` closes.
pub(crate) async fn debounce_signals(
    mut rx: mpsc::Receiver<()>,
    window: Duration,
    tx: broadcast::Sender<()>,
) {
    while rx.recv().await.is_some() {
        loop {
            tokio::select! {
                _ = tokio::time::sleep(window) => break,
                msg = rx.recv() => {
                    if msg.is_none() {
                        return;
                    }
                }
            }
        }

        info!("config file changed, sending reload signal");
        if tx.send(()).is_err() {
            debug!("no receivers for config reload signal");
        }
    }
}
