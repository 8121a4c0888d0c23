//! Status classification
//!
//! Maps an issue's progress stages to the label shown in the table, the
//! sidebar list and the map popups. Every view goes through [`classify`].

use shared::{DerivedStatus, Issue, Progress};

/// Status of an issue whose progress record is missing.
pub const MISSING_PROGRESS_STATUS: DerivedStatus = DerivedStatus::Pending;

/// Classifies a progress record. First match wins:
/// resolved, then in progress, then reported, else unknown.
pub fn classify(progress: Option<&Progress>) -> DerivedStatus {
    let Some(progress) = progress else {
        return MISSING_PROGRESS_STATUS;
    };
    if progress.resolved.completed {
        DerivedStatus::Resolved
    } else if progress.in_progress.completed {
        DerivedStatus::InProgress
    } else if progress.reported.completed {
        DerivedStatus::Pending
    } else {
        DerivedStatus::Unknown
    }
}

/// Shorthand for `classify(issue.progress.as_ref())`.
pub fn issue_status(issue: &Issue) -> DerivedStatus {
    classify(issue.progress.as_ref())
}
