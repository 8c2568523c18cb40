// HTTP server: HTML table to CSV
//
// Serves the landing page and the `/api/html` conversion endpoint.
// Configuration comes from TABLE2CSV_* environment variables (and PORT).

use anyhow::{Context, Result};
use kodegen_tools_table2csv::{AppState, ServerConfig, start_server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kodegen_tools_table2csv=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        bind_addr = config.bind_addr(),
        cell_text = ?config.cell_text(),
        line_terminator = ?config.line_terminator(),
        max_body_bytes = config.max_body_bytes(),
        assets_dir = %config.assets_dir().display(),
        "Loaded configuration"
    );

    start_server(AppState::new(config))
        .await
        .context("Server terminated with an error")?;

    Ok(())
}
