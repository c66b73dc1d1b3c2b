//! Ledger Service - Main Application Entry Point
//!
//! This is a REST API server for managing monetary accounts and executing
//! atomic transfers between them. All state lives in process memory; the
//! interesting part is the concurrency-safe transfer path (see
//! `services::ledger_service`).
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the shared ledger state (empty account store, log sink)
//! 3. Build HTTP router
//! 4. Start server on configured port

use ledger_service::{AppState, app, config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Build shared state: empty ledger, notifications to the log
    let state = AppState::with_log_sink();
    let router = app(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, router).await?;

    Ok(())
}
