//! Selection / view sync
//!
//! Tracks the single focused issue. The table, the sidebar list and the map
//! all render [`SelectionCoordinator::displayed`], which is derived from the
//! filtered issues and the selection on every call and never stored.

use std::sync::Arc;

use shared::Issue;

use crate::map::{Bounds, LatLng, ViewportCommand};

/// Where a selection came from. All origins lead to the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOrigin {
    TableRow,
    SidebarList,
    MapMarker,
}

/// Owns the selected issue.
#[derive(Debug, Clone)]
pub struct SelectionCoordinator {
    selected: Option<Arc<Issue>>,
    focus_zoom: u8,
}

impl SelectionCoordinator {
    pub fn new(focus_zoom: u8) -> Self {
        Self {
            selected: None,
            focus_zoom,
        }
    }

    pub fn selected(&self) -> Option<&Arc<Issue>> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, issue: &Issue) -> bool {
        self.selected.as_ref().is_some_and(|s| s.id == issue.id)
    }

    /// `[selected]` when something is selected, `filtered` otherwise.
    pub fn displayed<'a>(&'a self, filtered: &'a [Arc<Issue>]) -> &'a [Arc<Issue>] {
        match &self.selected {
            Some(issue) => std::slice::from_ref(issue),
            None => filtered,
        }
    }

    /// Focuses `issue`. Returns the camera move for the map, if the issue
    /// can be placed on it.
    pub fn select(&mut self, issue: Arc<Issue>, origin: SelectOrigin) -> Option<ViewportCommand> {
        tracing::debug!(id = %issue.id, ?origin, "Issue selected");
        let command = issue.coordinates().map(|(lat, lng)| ViewportCommand::FocusOn {
            center: LatLng::new(lat, lng),
            zoom: self.focus_zoom,
        });
        self.selected = Some(issue);
        command
    }

    /// Drops the selection. A no-op when nothing is selected; otherwise the
    /// map is fitted around the issues that become visible again.
    pub fn deselect(&mut self, filtered: &[Arc<Issue>]) -> Option<ViewportCommand> {
        let previous = self.selected.take()?;
        tracing::debug!(id = %previous.id, "Issue deselected");
        fit_all(filtered)
    }

    /// Clears the selection without producing a camera move.
    pub fn reset(&mut self) {
        self.selected = None;
    }
}

impl Default for SelectionCoordinator {
    fn default() -> Self {
        Self::new(crate::map::DEFAULT_FOCUS_ZOOM)
    }
}

/// Fit-bounds command covering every locatable issue, if there is one.
pub fn fit_all(issues: &[Arc<Issue>]) -> Option<ViewportCommand> {
    let points = issues
        .iter()
        .filter_map(|issue| issue.coordinates())
        .map(|(lat, lng)| LatLng::new(lat, lng));
    Bounds::from_points(points).map(|bounds| ViewportCommand::FitBounds { bounds })
}
