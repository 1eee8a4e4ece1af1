//! Infrastructure layer for Mnevi Backend
//!
//! Contains the blob storage abstraction and its implementations:
//! - Filesystem-backed store (production)
//! - In-memory store (tests)

mod error;
mod storage;

pub use error::StoreError;
pub use storage::{BlobStore, FsBlobStore, MemoryBlobStore};
