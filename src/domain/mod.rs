//! Core domain types for Mnevi Backend
//!
//! Contains the receipt record issued at upload time and the file-name
//! sanitizer used before any client-supplied name reaches a storage key.

mod filename;
mod receipt;

pub use filename::sanitize_filename;
pub use receipt::Receipt;
