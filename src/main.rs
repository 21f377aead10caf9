//! Scout - MCP server for the Help Scout Mailbox API
//!
//! This binary runs as an MCP server using stdio transport, allowing
//! Claude Code or Claude Desktop to browse Help Scout conversations
//! through natural language.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `HELPSCOUT_API_TOKEN`: Bearer token for the Help Scout API
//! - `HELPSCOUT_API_URL`: Optional base URL override
//!
//! # Usage
//!
//! ```bash
//! # Direct execution
//! ./scout
//!
//! # With environment variables
//! HELPSCOUT_API_TOKEN=xxx ./scout
//! ```

use anyhow::{Context, Result};
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{fmt, EnvFilter};

use scout::{config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Initialize logging to stderr (critical for stdio transport!)
    // stdout is reserved for MCP JSON-RPC messages
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scout=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting Scout MCP server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from environment. A missing token is allowed here;
    // a malformed base URL is not.
    let config = config::Config::from_env().context("Failed to load configuration")?;

    tracing::debug!("Configuration loaded, base_url: {}", config.base_url);

    if !config.has_token() {
        tracing::warn!(
            "HELPSCOUT_API_TOKEN is not set. The server will start, but tool \
             calls will fail until a token is configured."
        );
    }

    // Create the MCP server
    let server = server::ScoutServer::new(config);

    tracing::info!("Server initialized, starting stdio transport");

    // Serve on stdio transport
    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })
        .context("Failed to start server")?;

    tracing::info!("Server running, waiting for requests");

    // Wait for the service to complete (shutdown signal)
    service
        .waiting()
        .await
        .context("Server error during operation")?;

    tracing::info!("Server shutting down");

    Ok(())
}
