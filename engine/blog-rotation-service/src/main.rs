//! Blog Rotation Production Service
//!
//! This is the main entry point for the daily-rotation fantasy football
//! blogs API. It loads the exported catalog once, starts the BlogGateway,
//! and provides graceful shutdown handling.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};

use blog_rotation_service::{
    graceful_shutdown, initialize_logging, load_configuration, setup_signal_handlers, ServiceState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env before reading configuration
    dotenv::dotenv().ok();

    // Load configuration
    let config = load_configuration().context("Failed to load configuration")?;

    // Initialize logging
    initialize_logging(&config.logging)?;

    info!("Starting Blog Rotation Service v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded successfully");

    // Create service state
    let service_state = Arc::new(ServiceState::new(config).await?);
    info!("Service state initialized");

    // Setup signal handlers for graceful shutdown
    let shutdown_signal = setup_signal_handlers(service_state.clone())?;
    info!("Signal handlers configured");

    // Start the BlogGateway in a separate task
    info!("Starting BlogGateway...");
    let gateway_handle = {
        let state = service_state.clone();
        tokio::spawn(async move {
            if let Err(e) = state.start_gateway().await {
                error!("BlogGateway failed: {}", e);
            }
        })
    };

    // Wait for shutdown signal
    info!("Blog Rotation Service is running. Press Ctrl+C to shutdown gracefully.");
    let _ = shutdown_signal.await;

    // Graceful shutdown
    info!("Shutdown signal received. Initiating graceful shutdown...");
    graceful_shutdown(service_state, gateway_handle).await?;

    info!("Blog Rotation Service shutdown complete");
    Ok(())
}
