//! Error types for recipe-explorer
//!
//! Library code returns `ExplorerError`; the binary wraps it with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for explorer operations
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Main error type for explorer operations
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The catalog listing produced zero categories
    #[error("catalog contains no categories - nothing to explore")]
    EmptyCatalog,

    /// Catalog file does not exist
    #[error("catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Catalog file could not be decoded
    #[error("invalid catalog in {path}: {message}")]
    InvalidCatalog { path: PathBuf, message: String },

    /// Config file could not be decoded
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
