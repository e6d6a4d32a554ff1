//! Configuration for the BlogGateway

use crate::DEFAULT_PORT;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main configuration for the BlogGateway
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: DEFAULT_PORT }
    }
}

impl GatewayConfig {
    /// Get the server address
    pub fn server_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.server_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let config = GatewayConfig {
            server: ServerConfig { host: "not a host".to_string(), port: 5000 },
        };
        assert!(config.server_addr().is_err());
    }
}
