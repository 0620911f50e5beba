mod args;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use sublink_core::{ClientConfig, HttpDispatcher};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => match ClientConfig::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                error!(error = %e, path = %path.display(), "cannot read config");
                return ExitCode::FAILURE;
            }
        },
        None => ClientConfig::load(),
    };
    if let Some(server) = cli.server {
        config.base_url = server;
    }

    let dispatcher = match HttpDispatcher::from_config(&config) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            error!(error = %e, "cannot build http client");
            return ExitCode::FAILURE;
        }
    };

    match commands::run(dispatcher, cli.command).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "request failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
