//! Service state management and component initialization

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::ServiceConfig;
use blog_catalog::BlogCatalog;
use blog_gateway::BlogGateway;
use rotation_engine::RotationSchedule;

/// Service state containing all initialized components
pub struct ServiceState {
    /// Service configuration
    pub config: ServiceConfig,

    /// BlogGateway instance
    pub gateway: Arc<BlogGateway>,

    /// Service running state
    pub is_running: Arc<RwLock<bool>>,
}

impl ServiceState {
    /// Create a new service state with all components initialized
    pub async fn new(config: ServiceConfig) -> Result<Self> {
        info!("Initializing service components...");

        // Load the blog catalog exactly once; a missing or broken export
        // degrades to an empty catalog instead of refusing to start
        info!("Loading blog catalog...");
        let catalog = match BlogCatalog::load_from_file(&config.catalog.data_file).await {
            Ok(catalog) => {
                info!("Blog catalog loaded with {} records", catalog.len());
                catalog
            }
            Err(e) => {
                warn!(
                    "Failed to load blog catalog from {:?}: {e}; serving an empty catalog",
                    config.catalog.data_file
                );
                BlogCatalog::empty()
            }
        };

        let schedule = RotationSchedule::default();

        info!("Initializing BlogGateway...");
        let gateway = Arc::new(BlogGateway::new(config.gateway.clone(), catalog, schedule));

        Ok(Self { config, gateway, is_running: Arc::new(RwLock::new(false)) })
    }

    /// Start the BlogGateway; resolves only at shutdown
    pub async fn start_gateway(&self) -> Result<()> {
        {
            let mut is_running = self.is_running.write().await;
            *is_running = true;
        }

        self.gateway.start().await?;
        Ok(())
    }

    /// Stop the BlogGateway
    pub async fn stop_gateway(&self) -> Result<()> {
        self.gateway.stop().await;

        let mut is_running = self.is_running.write().await;
        *is_running = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_missing_export_degrades_to_empty_catalog() {
        let mut config = ServiceConfig::default();
        config.catalog.data_file = "data/definitely-not-here.json".into();

        let state = ServiceState::new(config).await.unwrap();
        assert!(state.gateway.catalog().is_empty());
    }

    #[tokio::test]
    async fn test_catalog_loads_from_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"blogs": [
                {"player_name": "Lamar Jackson", "position": "QB", "word_count": 1200},
                {"player_name": "Josh Allen", "position": "QB", "word_count": 950}
            ]}"#,
        )
        .unwrap();

        let mut config = ServiceConfig::default();
        config.catalog.data_file = file.path().to_path_buf();

        let state = ServiceState::new(config).await.unwrap();
        assert_eq!(state.gateway.catalog().len(), 2);
        assert!(!*state.is_running.read().await);
    }
}
