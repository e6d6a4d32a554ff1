//! Error types for the BlogGateway

use thiserror::Error;

/// Errors that can occur in the BlogGateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for BlogGateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
