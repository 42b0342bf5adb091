mod cli;
mod commands;

use std::process::ExitCode;

use hackerland_config::HackerlandConfig;
use tracing_subscriber::EnvFilter;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        default_hook(info);
    }));
}

/// Load the config named on the command line, or the default one.
fn load_config(args: &cli::Args) -> (HackerlandConfig, Option<String>) {
    let result = match &args.config {
        Some(path) => hackerland_config::load_config_from(path),
        None => hackerland_config::load_config(),
    };
    match result {
        Ok(config) => (config, None),
        Err(e) => (HackerlandConfig::default(), Some(e.to_string())),
    }
}

/// `--log-level` wins over `RUST_LOG`, which wins over `logging.level`.
fn init_logging(cli_filter: Option<&str>, config_level: &str) {
    let filter = match cli_filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    install_panic_hook();

    let args = cli::parse();

    let (mut config, config_error) = load_config(&args);
    init_logging(args.log_level.as_deref(), config.logging.level.as_str());
    tracing::info!("hackerland v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(socket) = &args.socket {
        config.ipc.socket_path = socket.clone();
    }

    let result = match args.command {
        cli::Command::Run {
            windows,
            width,
            height,
        } => commands::run(config, args.config, windows, width, height).await,
        cli::Command::Status { once } => commands::status(&config.ipc.socket_path, once).await,
        cli::Command::Send { command } => {
            commands::send(&config.ipc.socket_path, &command.join(" ")).await
        }
        cli::Command::Config => {
            println!("{}", hackerland_config::config_to_json(&config));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("hackerland: {e}");
            ExitCode::FAILURE
        }
    }
}
