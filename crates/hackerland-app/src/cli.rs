use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hackerland: tiling window manager core, status feed, and control.
#[derive(Parser, Debug)]
#[command(name = "hackerland", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Status socket path override.
    #[arg(long, global = true)]
    pub socket: Option<PathBuf>,

    /// Log filter override (trace, debug, info, warn, error, or an
    /// EnvFilter directive).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run a headless engine with synthetic windows and serve the status feed.
    Run {
        /// Synthetic windows to open on the first workspace.
        #[arg(long, default_value_t = 3)]
        windows: u64,

        /// Display width in pixels.
        #[arg(long, default_value_t = 1920.0)]
        width: f64,

        /// Display height in pixels.
        #[arg(long, default_value_t = 1080.0)]
        height: f64,
    },

    /// Print status snapshots as they arrive.
    Status {
        /// Exit after the first snapshot.
        #[arg(long)]
        once: bool,
    },

    /// Send one command line, e.g. `switch 2` or `master 0.05`.
    Send {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Print the effective configuration as JSON.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_defaults() {
        let args = Args::try_parse_from(["hackerland", "run"]).unwrap();
        assert_eq!(
            args.command,
            Command::Run {
                windows: 3,
                width: 1920.0,
                height: 1080.0
            }
        );
        assert!(args.config.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "hackerland",
            "status",
            "--once",
            "--socket",
            "/tmp/test.sock",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.command, Command::Status { once: true });
        assert_eq!(args.socket, Some(PathBuf::from("/tmp/test.sock")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn send_collects_words() {
        let args = Args::try_parse_from(["hackerland", "send", "switch", "2"]).unwrap();
        assert_eq!(
            args.command,
            Command::Send {
                command: vec!["switch".into(), "2".into()]
            }
        );
    }

    #[test]
    fn send_accepts_negative_delta() {
        let args = Args::try_parse_from(["hackerland", "send", "master", "-0.05"]).unwrap();
        assert_eq!(
            args.command,
            Command::Send {
                command: vec!["master".into(), "-0.05".into()]
            }
        );
    }

    #[test]
    fn send_requires_a_command() {
        assert!(Args::try_parse_from(["hackerland", "send"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["hackerland"]).is_err());
    }
}
