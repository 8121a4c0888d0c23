//! Map adapter
//!
//! Draws the dashboard's displayed issues and turns map clicks into
//! selection changes.
//!
//! One native click may hit a marker and the canvas underneath it. The marker
//! handler runs first and reports [`ClickOutcome::Consumed`]; the canvas
//! handler is handed that outcome and stands down, so a marker click never
//! deselects what it just selected.

use shared::IssueId;

use super::{build_markers, MapConfig, MapSurface, ViewportCommand};
use crate::dashboard::IssuesDashboard;
use crate::selection::SelectOrigin;

/// Result of a click handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Handled; later handlers must ignore this click
    Consumed,
    /// Not handled; later handlers may act
    Propagate,
}

#[derive(Debug, Clone, Default)]
pub struct MapAdapter {
    config: MapConfig,
}

impl MapAdapter {
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Installs the tile layer and the initial camera.
    pub fn mount<S: MapSurface>(&self, surface: &mut S) {
        surface.set_tile_layer(&self.config.tile_layer);
        surface.set_view(self.config.default_center, self.config.default_zoom);
    }

    /// Redraws all markers. Previously drawn markers are always removed first.
    /// Returns the number of markers drawn.
    pub fn render<S: MapSurface>(&self, surface: &mut S, dashboard: &IssuesDashboard) -> usize {
        surface.clear_markers();
        let selected = dashboard.selected().map(|issue| &issue.id);
        let markers = build_markers(dashboard.displayed(), selected);
        let count = markers.len();
        for marker in markers {
            surface.add_marker(marker);
        }
        count
    }

    pub fn apply_viewport<S: MapSurface>(&self, surface: &mut S, command: &ViewportCommand) {
        match *command {
            ViewportCommand::FocusOn { center, zoom } => surface.set_view(center, zoom),
            ViewportCommand::FitBounds { bounds } => {
                surface.fit_bounds(bounds, self.config.fit_padding)
            }
        }
    }

    /// Applies an optional camera move and redraws.
    pub fn sync<S: MapSurface>(
        &self,
        surface: &mut S,
        dashboard: &IssuesDashboard,
        command: Option<ViewportCommand>,
    ) -> usize {
        if let Some(command) = &command {
            self.apply_viewport(surface, command);
        }
        self.render(surface, dashboard)
    }

    /// Marker handler. Always consumes the click, even for a stale marker.
    pub fn on_marker_click<S: MapSurface>(
        &self,
        surface: &mut S,
        dashboard: &mut IssuesDashboard,
        id: &IssueId,
    ) -> ClickOutcome {
        match dashboard.select_by_id(id, SelectOrigin::MapMarker) {
            Ok(command) => {
                self.sync(surface, dashboard, command);
            }
            Err(e) => tracing::warn!("Marker click ignored: {}", e),
        }
        ClickOutcome::Consumed
    }

    /// Canvas handler. Deselects unless an earlier handler consumed the click.
    pub fn on_canvas_click<S: MapSurface>(
        &self,
        surface: &mut S,
        dashboard: &mut IssuesDashboard,
        prior: ClickOutcome,
    ) -> ClickOutcome {
        if prior == ClickOutcome::Consumed || dashboard.selected().is_none() {
            return prior;
        }
        let command = dashboard.deselect();
        self.sync(surface, dashboard, command);
        ClickOutcome::Consumed
    }

    /// Dispatches one native click: `marker_hit` is the marker under the
    /// pointer, if any.
    pub fn handle_click<S: MapSurface>(
        &self,
        surface: &mut S,
        dashboard: &mut IssuesDashboard,
        marker_hit: Option<&IssueId>,
    ) -> ClickOutcome {
        let outcome = match marker_hit {
            Some(id) => self.on_marker_click(surface, dashboard, id),
            None => ClickOutcome::Propagate,
        };
        self.on_canvas_click(surface, dashboard, outcome)
    }
}
