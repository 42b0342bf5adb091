//! Wire protocol for the status feed.
//!
//! Server to client: one snapshot per line, either
//! `workspace:2|windows:3|title:vim|sticky:false|layout:grid` or the same
//! fields as a one-line JSON object.
//!
//! Client to server: one command per line (`switch 2`, `scratchpad`,
//! `sticky`, `layout`, `master -0.05`, `passthrough`).

use std::fmt;

use hackerland_config::schema::SnapshotFormat;
use serde::{Deserialize, Serialize};

/// Top-level state published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Current workspace, 1-based.
    pub workspace: usize,
    /// Windows in the current workspace list (sticky windows excluded).
    pub windows: usize,
    /// Title of the active window, empty when nothing is focused.
    pub title: String,
    /// Whether the active window is sticky.
    pub sticky: bool,
    /// `master-stack`, `monocle`, `grid` or `passthrough`.
    pub layout: String,
}

impl StatusSnapshot {
    /// Render as a `key:value|...` line without the trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "workspace:{}|windows:{}|title:{}|sticky:{}|layout:{}",
            self.workspace,
            self.windows,
            sanitize(&self.title),
            self.sticky,
            sanitize(&self.layout),
        )
    }

    /// Render as one line of JSON.
    pub fn to_json(&self) -> String {
        // Plain strings and integers; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn encode(&self, format: SnapshotFormat) -> String {
        match format {
            SnapshotFormat::Line => self.to_line(),
            SnapshotFormat::Json => self.to_json(),
        }
    }

    /// Parse either wire encoding. Unknown keys are ignored; missing keys
    /// take empty/zero values.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.starts_with('{') {
            return serde_json::from_str(line).ok();
        }

        let mut snapshot = StatusSnapshot {
            workspace: 0,
            windows: 0,
            title: String::new(),
            sticky: false,
            layout: String::new(),
        };
        let mut seen_any = false;
        for field in line.split('|') {
            let Some((key, value)) = field.split_once(':') else {
                continue;
            };
            match key {
                "workspace" => snapshot.workspace = value.parse().ok()?,
                "windows" => snapshot.windows = value.parse().ok()?,
                "title" => snapshot.title = value.to_string(),
                "sticky" => snapshot.sticky = value.parse().ok()?,
                "layout" => snapshot.layout = value.to_string(),
                _ => continue,
            }
            seen_any = true;
        }
        seen_any.then_some(snapshot)
    }
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Field separators and line breaks would corrupt the line framing.
fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '|' | '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}

/// Commands accepted from subscribers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IpcCommand {
    /// Switch to a workspace, 1-based as typed by the user.
    SwitchWorkspace(usize),
    ToggleScratchpad,
    ToggleSticky,
    CycleLayout,
    ResizeMaster(f64),
    TogglePassthrough,
}

impl IpcCommand {
    /// Parse one command line. Returns `None` for anything malformed.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, Some(rest.trim())),
            None => (line, None),
        };

        match (verb, arg) {
            ("switch", Some(n)) => n
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .map(IpcCommand::SwitchWorkspace),
            ("master", Some(delta)) => delta
                .parse::<f64>()
                .ok()
                .filter(|d| d.is_finite())
                .map(IpcCommand::ResizeMaster),
            ("scratchpad", None) => Some(IpcCommand::ToggleScratchpad),
            ("sticky", None) => Some(IpcCommand::ToggleSticky),
            ("layout", None) => Some(IpcCommand::CycleLayout),
            ("passthrough", None) => Some(IpcCommand::TogglePassthrough),
            _ => None,
        }
    }
}

impl fmt::Display for IpcCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpcCommand::SwitchWorkspace(n) => write!(f, "switch {n}"),
            IpcCommand::ToggleScratchpad => f.write_str("scratchpad"),
            IpcCommand::ToggleSticky => f.write_str("sticky"),
            IpcCommand::CycleLayout => f.write_str("layout"),
            IpcCommand::ResizeMaster(delta) => write!(f, "master {delta}"),
            IpcCommand::TogglePassthrough => f.write_str("passthrough"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
