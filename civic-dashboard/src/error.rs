//! Dashboard error types

use shared::IssueId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The id is not part of the currently filtered issues
    #[error("Issue not found: {0}")]
    IssueNotFound(IssueId),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
