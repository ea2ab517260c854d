//! CLI command handlers.

use anyhow::{Context, Result};
use chatline_core::client::ChatClient;
use chatline_core::config::ChatlineConfig;

/// Run the interactive chat session.
pub(crate) async fn handle_chat_command(config: ChatlineConfig) -> Result<()> {
    chatline_core::ui::tui::run(config).await
}

/// Probe the backend health endpoint. Diagnostic only: failures are logged,
/// never turned into a process error.
pub(crate) async fn handle_health_command(config: &ChatlineConfig) -> Result<()> {
    let client = ChatClient::new(&config.backend.base_url)?;
    match client.check_health().await {
        Ok(body) => {
            let rendered =
                serde_json::to_string_pretty(&body).context("failed to render health reply")?;
            println!("{rendered}");
        }
        Err(err) => {
            tracing::error!(error = %err, "health check failed");
        }
    }
    Ok(())
}
