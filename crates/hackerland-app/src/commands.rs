//! Subcommand implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use hackerland_common::{HackerlandError, Rect, WindowHandle, WindowType};
use hackerland_config::{toml_loader, HackerlandConfig, ReloadManager};
use hackerland_ipc::{IpcClient, IpcCommand};
use hackerland_tiling::{Engine, RecordingHost};
use tracing::{debug, info, warn};

/// How long `send` waits for the snapshot its command produced.
const SEND_REPLY_TIMEOUT: Duration = Duration::from_millis(500);

/// Headless engine on a recording host until Ctrl-C.
pub async fn run(
    mut config: HackerlandConfig,
    config_path: Option<PathBuf>,
    windows: u64,
    width: f64,
    height: f64,
) -> Result<(), HackerlandError> {
    config.ipc.enabled = true;
    let host = Arc::new(RecordingHost::new(Rect::new(0.0, 0.0, width, height)));
    let engine = Engine::start(&config, host.clone())?;

    for n in 1..=windows {
        engine.window_ready(WindowHandle(n), WindowType::Normal, &format!("term-{n}"));
    }
    if windows > 0 {
        engine.focus_changed(Some(WindowHandle(windows)));
    }

    spawn_config_reload(config_path, engine.handle()).await;

    // Nobody renders these frames; keep the log from growing without bound.
    let frames = host.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            let drained = frames.take_frames().len();
            if drained > 0 {
                debug!(frames = drained, "discarded headless frames");
            }
        }
    });

    if let Some(path) = engine.socket_path() {
        info!(socket = %path.display(), windows, "headless engine running, Ctrl-C to stop");
    }
    tokio::signal::ctrl_c().await?;

    info!("shutting down");
    tokio::task::spawn_blocking(move || drop(engine))
        .await
        .map_err(|e| HackerlandError::Other(format!("shutdown failed: {e}")))?;
    Ok(())
}

/// Forward every reloaded config to the engine.
async fn spawn_config_reload(config_path: Option<PathBuf>, engine: hackerland_tiling::EngineHandle) {
    let path = match config_path {
        Some(path) => path,
        None => match toml_loader::default_config_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("live reload disabled: {e}");
                return;
            }
        },
    };

    let (_, mut updates) = ReloadManager::start(path).await;
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let config = updates.borrow_and_update().clone();
            engine.reload_config(&config);
        }
    });
}

/// Print the feed line by line in whatever format the server uses.
pub async fn status(socket: &Path, once: bool) -> Result<(), HackerlandError> {
    let mut client = IpcClient::connect(socket).await?;
    while let Some(line) = client.next_line().await? {
        println!("{line}");
        if once {
            break;
        }
    }
    Ok(())
}

/// Send one command and print the snapshot it produced, if any.
pub async fn send(socket: &Path, line: &str) -> Result<(), HackerlandError> {
    let command = IpcCommand::parse(line)
        .ok_or_else(|| HackerlandError::Other(format!("unknown command: {line}")))?;

    let mut client = IpcClient::connect(socket).await?;
    // The server writes the current state first; read it so the command is
    // not racing our own disconnect.
    client.next_line().await?;
    client.send(command).await?;

    match tokio::time::timeout(SEND_REPLY_TIMEOUT, client.next_line()).await {
        Ok(Ok(Some(line))) => println!("{line}"),
        Ok(Ok(None)) | Err(_) => debug!(%command, "no state change"),
        Ok(Err(e)) => return Err(e.into()),
    }
    Ok(())
}
