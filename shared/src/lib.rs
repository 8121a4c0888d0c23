//! Shared types for CivicConnect
//!
//! Wire and domain types used across the client, the dashboard core and the
//! console: issue records, derived status labels, filter selections and the
//! auth DTOs exchanged with the backend.

pub mod client;
pub mod filter;
pub mod models;
pub mod status;

// Re-exports
pub use filter::{FilterSelection, StatusFilter};
pub use models::{Issue, IssueId, Location, Progress, ProgressStage};
pub use serde::{Deserialize, Serialize};
pub use status::DerivedStatus;
