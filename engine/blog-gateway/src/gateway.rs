//! Main BlogGateway implementation

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::rest_api::create_routes;

use blog_catalog::BlogCatalog;
use rotation_engine::RotationSchedule;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Main BlogGateway service
///
/// Owns the immutable catalog and schedule and serves them over warp. The
/// catalog is published once at construction; request handling shares it
/// read-only, so there is no locking on the request path.
pub struct BlogGateway {
    /// Gateway configuration
    config: GatewayConfig,

    /// Shared immutable blog catalog
    catalog: Arc<BlogCatalog>,

    /// Rotation schedule
    schedule: Arc<RotationSchedule>,

    /// Running state
    is_running: Arc<RwLock<bool>>,
}

impl BlogGateway {
    /// Create a new BlogGateway
    pub fn new(config: GatewayConfig, catalog: BlogCatalog, schedule: RotationSchedule) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            schedule: Arc::new(schedule),
            is_running: Arc::new(RwLock::new(false)),
        }
    }

    /// The shared catalog served by this gateway
    pub fn catalog(&self) -> Arc<BlogCatalog> {
        self.catalog.clone()
    }

    /// Start serving requests; resolves only at process shutdown
    pub async fn start(&self) -> GatewayResult<()> {
        let addr: SocketAddr = self
            .config
            .server_addr()
            .map_err(|e| GatewayError::Config(format!("invalid server address: {e}")))?;

        {
            let mut is_running = self.is_running.write().await;
            *is_running = true;
        }

        info!("BlogGateway serving {} blog records on {}", self.catalog.len(), addr);

        let routes = create_routes(self.catalog.clone(), self.schedule.clone());
        warp::serve(routes).run(addr).await;

        Ok(())
    }

    /// Mark the gateway as stopped
    pub async fn stop(&self) {
        let mut is_running = self.is_running.write().await;
        *is_running = false;
        info!("BlogGateway stopped");
    }

    /// Whether the gateway is currently serving
    pub async fn is_running(&self) -> bool {
        *self.is_running.read().await
    }
}
