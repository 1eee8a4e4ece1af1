//! Cryptographic utilities for Mnevi Backend
//!
//! Provides SHA-256 content hashing over files (streamed in bounded
//! chunks) and over in-memory byte slices.

mod hash;

pub use hash::*;
