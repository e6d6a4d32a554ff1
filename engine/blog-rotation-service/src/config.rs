//! Service configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use blog_catalog::DEFAULT_BLOGS_FILE;
use blog_gateway::{GatewayConfig, DEFAULT_PORT};

/// Optional configuration file consulted at startup
pub const CONFIG_FILE: &str = "blog-rotation.toml";

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// BlogGateway configuration
    pub gateway: GatewayConfig,

    /// Catalog source configuration
    pub catalog: CatalogSettings,

    /// Service-level configuration
    pub service: ServiceSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Catalog source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Exported blogs file, consumed exactly once at startup
    pub data_file: PathBuf,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { data_file: PathBuf::from(DEFAULT_BLOGS_FILE) }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self { shutdown_timeout_secs: 10 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

/// Load configuration from files and environment variables
pub fn load_config() -> Result<ServiceConfig> {
    let mut config = if Path::new(CONFIG_FILE).exists() {
        tracing::debug!("Loading configuration from file: {CONFIG_FILE}");
        load_from_file(Path::new(CONFIG_FILE))?
    } else {
        ServiceConfig::default()
    };

    // Override with environment variables
    load_from_env(&mut config);

    // Validate configuration
    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from a TOML file
fn load_from_file(path: &Path) -> Result<ServiceConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {path:?}"))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse configuration file: {path:?}"))
}

/// Load configuration from environment variables
fn load_from_env(config: &mut ServiceConfig) {
    // Deployment platforms inject the listen port
    if let Ok(port) = std::env::var("PORT") {
        config.gateway.server.port = port.parse().unwrap_or(DEFAULT_PORT);
    }

    if let Ok(host) = std::env::var("BLOG_HOST") {
        config.gateway.server.host = host;
    }

    if let Ok(level) = std::env::var("BLOG_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Ok(format) = std::env::var("BLOG_LOG_FORMAT") {
        config.logging.format = format;
    }

    if let Ok(data_file) = std::env::var("BLOG_DATA_FILE") {
        config.catalog.data_file = PathBuf::from(data_file);
    }
}

/// Validate configuration
fn validate_config(config: &ServiceConfig) -> Result<()> {
    // Validate log level
    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow::anyhow!("Invalid log level: {}", config.logging.level)),
    }

    // Validate log format
    match config.logging.format.as_str() {
        "json" | "pretty" => {}
        _ => return Err(anyhow::anyhow!("Invalid log format: {}", config.logging.format)),
    }

    // Validate server port
    if config.gateway.server.port == 0 {
        return Err(anyhow::anyhow!("Invalid server port: {}", config.gateway.server.port));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.gateway.server.port, DEFAULT_PORT);
        assert_eq!(config.catalog.data_file, PathBuf::from(DEFAULT_BLOGS_FILE));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.service.shutdown_timeout_secs, 10);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("PORT", "8088");
        std::env::set_var("BLOG_LOG_LEVEL", "debug");
        std::env::set_var("BLOG_DATA_FILE", "elsewhere/blogs.json");

        let mut config = ServiceConfig::default();
        load_from_env(&mut config);

        std::env::remove_var("PORT");
        std::env::remove_var("BLOG_LOG_LEVEL");
        std::env::remove_var("BLOG_DATA_FILE");

        assert_eq!(config.gateway.server.port, 8088);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.catalog.data_file, PathBuf::from("elsewhere/blogs.json"));

        // An unparseable port falls back to the default
        std::env::set_var("PORT", "not-a-port");
        let mut config = ServiceConfig::default();
        load_from_env(&mut config);
        std::env::remove_var("PORT");

        assert_eq!(config.gateway.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ServiceConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.logging.format = "xml".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.gateway.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_partial_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[logging]\nlevel = \"warn\"\nformat = \"json\"\n").unwrap();

        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "json");
        // Unspecified sections keep their defaults
        assert_eq!(config.gateway.server.port, DEFAULT_PORT);
    }
}
