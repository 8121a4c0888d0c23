//! Data models
//!
//! Records supplied by the backend and consumed read-only by the dashboard.

pub mod category;
pub mod issue;

// Re-exports
pub use category::*;
pub use issue::*;
