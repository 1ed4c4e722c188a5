//! Gemini Tools Server Entry Point
//!
//! Loads configuration, initializes logging and serves the HTTP API.

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use gemini_tools_server::core::{Config, HttpTransport, ToolServer};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing API key is fatal; nothing is bound in that case.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            error!("{}", e);
            return Err(e.into());
        }
    };

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Model: {}", config.gemini.model);

    let transport = HttpTransport::new(config.transport.clone());
    let server = ToolServer::new(config).context("failed to build the Gemini client")?;

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` wins when set; otherwise `level` applies to every target.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
