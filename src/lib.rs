//! Mnevi Backend Library
//!
//! Local proof-of-existence service: accepts a file upload, hashes its
//! content with SHA-256, and issues a JSON receipt asserting that a file
//! with that hash existed at issuance time. A verification endpoint checks
//! a file against a previously issued receipt. No blockchain, no external
//! anchoring; receipts are backed by local timestamping only.
//!
//! ## Modules
//!
//! - [`domain`] - Core domain types (receipts, file-name sanitization)
//! - [`infra`] - Infrastructure implementations (blob storage)
//! - [`crypto`] - Cryptographic utilities (streaming SHA-256)
//! - [`api`] - REST API routes and handlers
//! - [`server`] - HTTP server bootstrap and configuration

pub mod api;
pub mod crypto;
pub mod domain;
pub mod infra;
pub mod server;

// Re-export commonly used types
pub use domain::Receipt;
pub use infra::{BlobStore, FsBlobStore, MemoryBlobStore, StoreError};
