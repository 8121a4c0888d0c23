//! Filter engine
//!
//! Narrows the issue snapshot by status and category. Each change re-derives
//! the filtered set from the full snapshot, so the two dimensions never
//! accumulate across changes.

use std::collections::BTreeSet;
use std::sync::Arc;

use shared::{FilterSelection, Issue, Progress, StatusFilter};

/// Status predicate for one filter value.
///
/// These are stage checks, not a comparison against [`crate::classify`]: an
/// issue with no progress record matches no status constraint.
pub fn matches_status(status: StatusFilter, progress: Option<&Progress>) -> bool {
    let Some(p) = progress else {
        return false;
    };
    match status {
        StatusFilter::Pending => {
            p.reported.completed && !p.in_progress.completed && !p.resolved.completed
        }
        StatusFilter::InProgress => p.in_progress.completed && !p.resolved.completed,
        StatusFilter::Resolved => p.resolved.completed,
    }
}

/// True when `issue` satisfies both dimensions of `selection`.
pub fn matches(issue: &Issue, selection: &FilterSelection) -> bool {
    let category_ok = selection
        .category
        .as_deref()
        .is_none_or(|category| issue.category == category);
    let status_ok = selection
        .status
        .is_none_or(|status| matches_status(status, issue.progress.as_ref()));
    category_ok && status_ok
}

/// Stable subsequence of `all` matching `selection`.
pub fn apply(all: &[Arc<Issue>], selection: &FilterSelection) -> Vec<Arc<Issue>> {
    all.iter()
        .filter(|issue| matches(issue, selection))
        .cloned()
        .collect()
}

/// Distinct categories present in `all`, sorted.
pub fn categories(all: &[Arc<Issue>]) -> Vec<String> {
    all.iter()
        .map(|issue| issue.category.as_str())
        .filter(|category| !category.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Owns the current filter selection and the filtered issues.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    selection: FilterSelection,
    filtered: Vec<Arc<Issue>>,
}

impl FilterEngine {
    /// Engine showing everything in `all`.
    pub fn new(all: &[Arc<Issue>]) -> Self {
        Self {
            selection: FilterSelection::all(),
            filtered: all.to_vec(),
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn filtered(&self) -> &[Arc<Issue>] {
        &self.filtered
    }

    /// Replaces both dimensions and re-derives from `all`.
    pub fn apply(&mut self, all: &[Arc<Issue>], selection: FilterSelection) {
        self.filtered = apply(all, &selection);
        tracing::debug!(
            status = ?selection.status,
            category = ?selection.category,
            matched = self.filtered.len(),
            total = all.len(),
            "Filters applied"
        );
        self.selection = selection;
    }

    /// Changes the status dimension only.
    pub fn set_status(&mut self, all: &[Arc<Issue>], status: Option<StatusFilter>) {
        let selection = FilterSelection {
            status,
            ..self.selection.clone()
        };
        self.apply(all, selection);
    }

    /// Changes the category dimension only. An empty string clears it.
    pub fn set_category(&mut self, all: &[Arc<Issue>], category: Option<String>) {
        let selection = FilterSelection {
            category: category.filter(|c| !c.is_empty()),
            ..self.selection.clone()
        };
        self.apply(all, selection);
    }

    /// Back to no constraints and the full snapshot.
    pub fn clear(&mut self, all: &[Arc<Issue>]) {
        self.selection = FilterSelection::all();
        self.filtered = all.to_vec();
    }
}
