//! Unix-socket status server.
//!
//! Runs on its own `hackerland-ipc` thread with a current-thread tokio
//! runtime: one accept loop plus one task per connection. The engine is
//! reached only through [`StatusSource`], so the state lock is taken just
//! for attach and command dispatch.

mod connection;


use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;

use hackerland_common::IpcError;
use hackerland_config::schema::SnapshotFormat;
use tokio::net::UnixListener;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::protocol::{IpcCommand, StatusSnapshot};

/// The state the server publishes and the sink for inbound commands.
pub trait StatusSource: Send + Sync + 'static {
    /// Current snapshot plus a receiver for every later one.
    ///
    /// Implementations must take both under the same lock so that no
    /// update falls between them or is delivered twice.
    fn attach(&self) -> (StatusSnapshot, broadcast::Receiver<StatusSnapshot>);

    /// Apply a command from a subscriber.
    fn dispatch(&self, command: IpcCommand);
}

/// Handle to a running server. Dropping it stops the server.
pub struct IpcServer {
    path: PathBuf,
    shutdown_tx: watch::Sender<bool>,
    thread: Option<JoinHandle<()>>,
}

impl IpcServer {
    /// Bind `path` and start serving on a background thread.
    ///
    /// A leftover socket file from a previous run is removed first; a
    /// socket that still accepts connections is left alone and binding
    /// fails with `AddrInUse`.
    pub fn start(
        path: impl Into<PathBuf>,
        format: SnapshotFormat,
        source: Arc<dyn StatusSource>,
    ) -> Result<Self, IpcError> {
        let path = path.into();
        remove_stale_socket(&path)?;

        let listener =
            std::os::unix::net::UnixListener::bind(&path).map_err(|source| IpcError::Bind {
                path: path.clone(),
                source,
            })?;
        listener.set_nonblocking(true)?;

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let thread = std::thread::Builder::new()
            .name("hackerland-ipc".into())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        error!(error = %e, "failed to create ipc runtime");
                        return;
                    }
                };
                runtime.block_on(accept_loop(listener, format, source, shutdown_rx));
            })?;

        info!(path = %path.display(), ?format, "ipc server listening");
        Ok(Self {
            path,
            shutdown_tx,
            thread: Some(thread),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Signal shutdown, join the thread, and unlink the socket. Idempotent.
    pub fn stop(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        let _ = self.shutdown_tx.send(true);
        if thread.join().is_err() {
            error!("ipc thread panicked");
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "failed to remove socket");
            }
        }
        info!(path = %self.path.display(), "ipc server stopped");
    }
}

impl Drop for IpcServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn remove_stale_socket(path: &Path) -> Result<(), IpcError> {
    let Ok(metadata) = std::fs::symlink_metadata(path) else {
        return Ok(());
    };
    if !metadata.file_type().is_socket() {
        // Not ours to delete; bind will report the conflict.
        return Ok(());
    }
    if std::os::unix::net::UnixStream::connect(path).is_ok() {
        return Err(IpcError::Bind {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AddrInUse,
                "another instance is serving this socket",
            ),
        });
    }
    debug!(path = %path.display(), "removing stale socket");
    std::fs::remove_file(path)?;
    Ok(())
}

async fn accept_loop(
    listener: std::os::unix::net::UnixListener,
    format: SnapshotFormat,
    source: Arc<dyn StatusSource>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let listener = match UnixListener::from_std(listener) {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, "failed to register ipc listener");
            return;
        }
    };

    let mut connections = JoinSet::new();
    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, _)) => {
                    debug!(clients = connections.len() + 1, "subscriber connected");
                    connections.spawn(connection::serve(
                        stream,
                        format,
                        Arc::clone(&source),
                        shutdown_rx.clone(),
                    ));
                }
                Err(e) => warn!(error = %e, "accept failed"),
            },
            Some(_) = connections.join_next(), if !connections.is_empty() => {}
            _ = shutdown_rx.changed() => break,
        }
    }

    connections.shutdown().await;
}
