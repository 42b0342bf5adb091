//! One subscriber connection: initial snapshot, then commands in and
//! updates out until either side goes away.

use std::io;
use std::sync::Arc;

use hackerland_config::schema::SnapshotFormat;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;
use tokio::sync::{broadcast, watch};
use tracing::{debug, warn};

use super::StatusSource;
use crate::protocol::{IpcCommand, StatusSnapshot};

/// Longest command line accepted from a subscriber, newline excluded.
pub(super) const MAX_LINE_LEN: usize = 4096;

pub(super) async fn serve(
    stream: UnixStream,
    format: SnapshotFormat,
    source: Arc<dyn StatusSource>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let (read_half, mut write_half) = stream.into_split();
    let mut commands = CommandReader::new(BufReader::new(read_half));
    let (initial, mut updates) = source.attach();

    if write_snapshot(&mut write_half, &initial, format).await.is_err() {
        debug!("subscriber gone before initial snapshot");
        return;
    }

    loop {
        tokio::select! {
            inbound = commands.next_line() => match inbound {
                Ok(Some(Inbound::Line(line))) => match IpcCommand::parse(&line) {
                    Some(command) => {
                        debug!(%command, "ipc command");
                        source.dispatch(command);
                    }
                    None => debug!(line = %line.trim(), "ignoring malformed command"),
                },
                Ok(Some(Inbound::TooLong)) => {
                    debug!(limit = MAX_LINE_LEN, "ignoring over-long command line");
                }
                Ok(None) => break,
                Err(e) => {
                    debug!(error = %e, "subscriber read failed");
                    break;
                }
            },
            update = updates.recv() => match update {
                Ok(snapshot) => {
                    if write_snapshot(&mut write_half, &snapshot, format).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "status subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            _ = shutdown_rx.changed() => break,
        }
    }
    debug!("subscriber disconnected");
}

async fn write_snapshot<W>(
    writer: &mut W,
    snapshot: &StatusSnapshot,
    format: SnapshotFormat,
) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = snapshot.encode(format);
    line.push('\n');
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await
}

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Inbound {
    /// A complete line, invalid UTF-8 replaced.
    Line(String),
    /// A line longer than [`MAX_LINE_LEN`]; its bytes were dropped.
    TooLong,
}

/// Newline-delimited reader that never buffers more than one capped line.
///
/// Partial input lives in the reader, not in the future, so `next_line`
/// can be dropped by `select!` without losing bytes.
pub(super) struct CommandReader<R> {
    reader: R,
    pending: Vec<u8>,
    overflowed: bool,
}

impl<R: AsyncBufRead + Unpin> CommandReader<R> {
    pub(super) fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
            overflowed: false,
        }
    }

    /// Next line, or `None` at end of stream. A trailing unterminated
    /// fragment is dropped.
    pub(super) async fn next_line(&mut self) -> io::Result<Option<Inbound>> {
        loop {
            let available = self.reader.fill_buf().await?;
            if available.is_empty() {
                return Ok(None);
            }

            let newline = available.iter().position(|&b| b == b'\n');
            let body = &available[..newline.unwrap_or(available.len())];
            if self.overflowed || self.pending.len() + body.len() > MAX_LINE_LEN {
                self.overflowed = true;
                self.pending.clear();
            } else {
                self.pending.extend_from_slice(body);
            }
            let consumed = newline.map_or(available.len(), |i| i + 1);
            self.reader.consume(consumed);

            if newline.is_some() {
                return Ok(Some(self.finish_line()));
            }
        }
    }

    fn finish_line(&mut self) -> Inbound {
        if std::mem::take(&mut self.overflowed) {
            return Inbound::TooLong;
        }
        let line = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        Inbound::Line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn read_all(input: &[u8]) -> Vec<Inbound> {
        let mut reader = CommandReader::new(input);
        let mut out = Vec::new();
        while let Some(inbound) = reader.next_line().await.unwrap() {
            out.push(inbound);
        }
        out
    }

    #[tokio::test]
    async fn splits_on_newlines() {
        let lines = read_all(b"switch 2\nsticky\n").await;
        assert_eq!(
            lines,
            vec![Inbound::Line("switch 2".into()), Inbound::Line("sticky".into())]
        );
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced_not_fatal() {
        let lines = read_all(b"\xff\xfe garbage\nsticky\n").await;
        assert_eq!(lines.len(), 2);
        assert!(matches!(&lines[0], Inbound::Line(l) if l.contains('\u{fffd}')));
        assert_eq!(lines[1], Inbound::Line("sticky".into()));
    }

    #[tokio::test]
    async fn over_long_line_is_dropped_and_reading_resumes() {
        let mut input = vec![b'a'; MAX_LINE_LEN * 3];
        input.extend_from_slice(b"\nsticky\n");
        let lines = read_all(&input).await;
        assert_eq!(lines, vec![Inbound::TooLong, Inbound::Line("sticky".into())]);
    }

    #[tokio::test]
    async fn line_at_the_limit_is_kept() {
        let mut input = vec![b'a'; MAX_LINE_LEN];
        input.push(b'\n');
        let lines = read_all(&input).await;
        assert!(matches!(&lines[..], [Inbound::Line(l)] if l.len() == MAX_LINE_LEN));
    }

    #[tokio::test]
    async fn unterminated_tail_is_dropped() {
        let lines = read_all(b"sticky\nswitch").await;
        assert_eq!(lines, vec![Inbound::Line("sticky".into())]);
    }
}
