//! Async client for the status socket.

use std::path::Path;

use hackerland_common::IpcError;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::unix::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::UnixStream;
use tracing::debug;

use crate::protocol::{IpcCommand, StatusSnapshot};

/// A connected subscriber. Every connection is both a feed reader and a
/// command sender.
pub struct IpcClient {
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl IpcClient {
    pub async fn connect(path: &Path) -> Result<Self, IpcError> {
        let stream = UnixStream::connect(path).await?;
        let (read_half, writer) = stream.into_split();
        debug!(path = %path.display(), "connected to status socket");
        Ok(Self {
            lines: BufReader::new(read_half).lines(),
            writer,
        })
    }

    pub async fn send(&mut self, command: IpcCommand) -> Result<(), IpcError> {
        self.send_raw(&command.to_string()).await
    }

    /// Send an arbitrary line; the server ignores anything it cannot parse.
    pub async fn send_raw(&mut self, line: &str) -> Result<(), IpcError> {
        let mut line = line.trim_end().to_string();
        line.push('\n');
        self.send_bytes(line.as_bytes()).await
    }

    /// Write bytes to the socket unchanged.
    pub async fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), IpcError> {
        self.writer.write_all(bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Next raw line from the server, `None` once it closes the connection.
    pub async fn next_line(&mut self) -> Result<Option<String>, IpcError> {
        Ok(self.lines.next_line().await?)
    }

    /// Next snapshot, skipping lines that do not parse.
    pub async fn next_snapshot(&mut self) -> Result<Option<StatusSnapshot>, IpcError> {
        while let Some(line) = self.next_line().await? {
            match StatusSnapshot::parse(&line) {
                Some(snapshot) => return Ok(Some(snapshot)),
                None => debug!(line = %line, "skipping unparseable status line"),
            }
        }
        Ok(None)
    }
}
