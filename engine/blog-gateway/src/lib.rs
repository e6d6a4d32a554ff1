//! BlogGateway - REST API for the daily blog rotation
//!
//! This module provides the external HTTP interface for the blog service:
//! the full catalog, today's rotation window, per-player lookup, and
//! aggregate statistics, all as JSON over warp with permissive CORS.

pub mod config;
pub mod error;
pub mod gateway;
pub mod rest_api;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use gateway::BlogGateway;

/// Version of the BlogGateway API
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;
