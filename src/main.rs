//! chatline - terminal chat client for a hosted chat backend.
//!
//! Thin binary entry point that delegates to the CLI handlers.

use anyhow::{Context, Result};
use chatline_core::cli::args::{Cli, Commands};
use chatline_core::config::ChatlineConfig;
use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    initialize_tracing();

    let args = Cli::parse();
    let mut config =
        ChatlineConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(base_url) = args.base_url {
        config.backend.base_url = base_url;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.backend.base_url,
        "starting chatline"
    );

    match args.command {
        Some(Commands::Health) => cli::handle_health_command(&config).await,
        None => cli::handle_chat_command(config).await,
    }
}

/// Respect `RUST_LOG` when set; stay silent otherwise so log output never
/// writes over the session view.
fn initialize_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }
}
