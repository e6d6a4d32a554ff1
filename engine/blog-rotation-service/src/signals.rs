//! Signal handling for graceful shutdown

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::service::ServiceState;

/// Setup signal handlers for graceful shutdown
///
/// Resolves the returned receiver on Ctrl+C (SIGINT) or, on Unix, SIGTERM.
pub fn setup_signal_handlers(_service_state: Arc<ServiceState>) -> Result<oneshot::Receiver<()>> {
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    // SIGTERM sets a flag (Unix only); the task below polls it alongside Ctrl+C
    let sigterm_flag = Arc::new(AtomicBool::new(false));
    #[cfg(unix)]
    signal_hook::flag::register(signal_hook::consts::SIGTERM, sigterm_flag.clone())?;

    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            if sigterm_flag.load(Ordering::Relaxed) {
                info!("SIGTERM signal received");
                break;
            }

            tokio::select! {
                result = &mut ctrl_c => {
                    match result {
                        Ok(()) => info!("Ctrl+C signal received"),
                        Err(e) => error!("Failed to listen for Ctrl+C signal: {}", e),
                    }
                    break;
                }
                _ = tokio::time::sleep(Duration::from_millis(100)) => {}
            }
        }

        let _ = shutdown_tx.send(());
    });

    Ok(shutdown_rx)
}

/// Graceful shutdown handler
pub async fn graceful_shutdown(
    service_state: Arc<ServiceState>,
    gateway_handle: tokio::task::JoinHandle<()>,
) -> Result<()> {
    info!("Starting graceful shutdown...");

    // Stop the BlogGateway
    if let Err(e) = service_state.stop_gateway().await {
        error!("Failed to stop BlogGateway: {}", e);
    }

    // The warp serve future only resolves when the process exits, so abort
    // the serve task and bound the wait
    let shutdown_timeout = Duration::from_secs(service_state.config.service.shutdown_timeout_secs);
    gateway_handle.abort();
    match timeout(shutdown_timeout, gateway_handle).await {
        Ok(Ok(())) => {
            info!("BlogGateway stopped gracefully");
        }
        Ok(Err(e)) if e.is_cancelled() => {
            info!("BlogGateway serve task aborted");
        }
        Ok(Err(e)) => {
            error!("BlogGateway task failed: {}", e);
        }
        Err(_) => {
            warn!("BlogGateway did not stop within timeout, forcing shutdown");
        }
    }

    info!("Graceful shutdown complete");
    Ok(())
}
