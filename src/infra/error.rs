//! Error types for Mnevi Backend infrastructure

use thiserror::Error;

/// Errors that can occur in blob storage
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying I/O error
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains path separators, traversal sequences, or is empty
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// No blob stored under the given key
    #[error("blob not found: {0}")]
    NotFound(String),
}
