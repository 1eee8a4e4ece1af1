//! REST API handlers organized by endpoint.

pub mod health;
pub mod upload;
pub mod verify;

pub use health::*;
pub use upload::*;
pub use verify::*;
