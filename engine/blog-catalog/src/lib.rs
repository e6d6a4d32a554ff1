//! Blog Catalog - Ordered collection of player blog write-ups
//!
//! This module loads the exported blogs JSON file once at startup and
//! provides the ordered catalog plus a name-indexed view used by the
//! gateway for case-insensitive lookups.

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::BlogCatalog;
pub use error::CatalogError;
pub use types::BlogRecord;

/// Current version of the blog catalog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default location of the exported blogs file, relative to the working directory
pub const DEFAULT_BLOGS_FILE: &str = "data/blogs/fantasy_blogs_export.json";
