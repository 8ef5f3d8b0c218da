//! # Chat Room
//!
//! A small chat room backend with presence tracking.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Store (in-memory or PostgreSQL)
//! - Presence sweeper
//! - HTTP server

use anyhow::Result;
use tracing::info;

use chat_room::config::Settings;
use chat_room::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    chat_room::telemetry::init_tracing();

    info!("Starting Chat Room...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        store = %settings.store.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
