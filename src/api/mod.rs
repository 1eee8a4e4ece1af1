//! API layer for Mnevi Backend
//!
//! REST endpoints for receipt issuance, verification, and liveness.

pub mod error;
pub mod handlers;
mod rest;
pub mod types;

pub use error::ApiError;
pub use rest::router;
