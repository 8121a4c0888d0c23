//! Derived issue status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-facing status label computed from an issue's progress stages.
///
/// Never stored by the backend; see the dashboard's classifier for the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivedStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Unknown,
}

impl DerivedStatus {
    pub const ALL: [DerivedStatus; 4] = [
        DerivedStatus::Pending,
        DerivedStatus::InProgress,
        DerivedStatus::Resolved,
        DerivedStatus::Unknown,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            DerivedStatus::Pending => "Pending",
            DerivedStatus::InProgress => "In Progress",
            DerivedStatus::Resolved => "Resolved",
            DerivedStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DerivedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
