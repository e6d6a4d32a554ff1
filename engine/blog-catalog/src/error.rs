//! Error types for catalog loading

use thiserror::Error;

/// Errors that can occur while loading the blog catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected JSON structure: {0}")]
    UnexpectedShape(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
