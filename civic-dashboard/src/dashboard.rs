//! Issues dashboard
//!
//! Composes the snapshot, the filter engine and the selection coordinator.
//! Every mutation goes through `&mut IssuesDashboard`; methods that change
//! what the map should show return the camera move to apply.

use std::sync::Arc;

use async_trait::async_trait;
use civic_client::{CivicClient, ClientResult, SessionState};
use shared::{FilterSelection, Issue, IssueId, StatusFilter};

use crate::error::{DashboardError, DashboardResult};
use crate::filter::{self, FilterEngine};
use crate::map::{MapConfig, ViewportCommand};
use crate::selection::{fit_all, SelectOrigin, SelectionCoordinator};
use crate::table::{self, ListEntry, TableRow};

/// Where issues come from.
#[async_trait]
pub trait IssueSource: Send + Sync {
    async fn fetch_issues(&self) -> ClientResult<Vec<Issue>>;
}

#[async_trait]
impl<S: SessionState> IssueSource for CivicClient<S> {
    async fn fetch_issues(&self) -> ClientResult<Vec<Issue>> {
        CivicClient::<S>::fetch_issues(self).await
    }
}

/// Which main view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Map,
}

/// Outcome of [`IssuesDashboard::refresh`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FetchStatus {
    /// New snapshot in place; `viewport` fits the map around it
    Loaded {
        count: usize,
        viewport: Option<ViewportCommand>,
    },
    /// Fetch failed and was logged; the previous snapshot is kept
    Failed,
}

#[derive(Debug, Clone)]
pub struct IssuesDashboard {
    all: Arc<[Arc<Issue>]>,
    filter: FilterEngine,
    selection: SelectionCoordinator,
    view: ViewMode,
}

impl Default for IssuesDashboard {
    fn default() -> Self {
        Self::new(&MapConfig::default())
    }
}

impl IssuesDashboard {
    /// Empty dashboard, as before the first fetch.
    pub fn new(map_config: &MapConfig) -> Self {
        Self {
            all: Arc::from(Vec::new()),
            filter: FilterEngine::default(),
            selection: SelectionCoordinator::new(map_config.focus_zoom),
            view: ViewMode::default(),
        }
    }

    // ========== Data ==========

    /// Replaces the snapshot wholesale and resets to "show all".
    pub fn load(&mut self, issues: Vec<Issue>) -> Option<ViewportCommand> {
        self.all = issues.into_iter().map(Arc::new).collect();
        self.filter = FilterEngine::new(&self.all);
        self.selection.reset();
        tracing::info!(count = self.all.len(), "Issue snapshot loaded");
        fit_all(self.filter.filtered())
    }

    /// Fetches from `source` and loads the result.
    ///
    /// Failures are logged, not returned: the dashboard keeps whatever it
    /// showed before (empty on first load) and stays interactive.
    pub async fn refresh<S: IssueSource + ?Sized>(&mut self, source: &S) -> FetchStatus {
        match source.fetch_issues().await {
            Ok(issues) => {
                let count = issues.len();
                let viewport = self.load(issues);
                FetchStatus::Loaded { count, viewport }
            }
            Err(e) => {
                tracing::error!("Failed to fetch issues: {}", e);
                FetchStatus::Failed
            }
        }
    }

    pub fn all_issues(&self) -> &[Arc<Issue>] {
        &self.all
    }

    pub fn filtered(&self) -> &[Arc<Issue>] {
        self.filter.filtered()
    }

    pub fn selected(&self) -> Option<&Arc<Issue>> {
        self.selection.selected()
    }

    /// What the table, list and map render.
    pub fn displayed(&self) -> &[Arc<Issue>] {
        self.selection.displayed(self.filter.filtered())
    }

    pub fn filter_selection(&self) -> &FilterSelection {
        self.filter.selection()
    }

    /// Options for the category dropdown.
    pub fn categories(&self) -> Vec<String> {
        filter::categories(&self.all)
    }

    // ========== Filters ==========
    // Every filter change deselects, then the map fits the new filtered set.

    pub fn apply_filters(&mut self, selection: FilterSelection) -> Option<ViewportCommand> {
        self.filter.apply(&self.all, selection);
        self.after_filter_change()
    }

    pub fn set_status_filter(&mut self, status: Option<StatusFilter>) -> Option<ViewportCommand> {
        self.filter.set_status(&self.all, status);
        self.after_filter_change()
    }

    pub fn set_category_filter(&mut self, category: Option<String>) -> Option<ViewportCommand> {
        self.filter.set_category(&self.all, category);
        self.after_filter_change()
    }

    pub fn clear_filters(&mut self) -> Option<ViewportCommand> {
        self.filter.clear(&self.all);
        self.after_filter_change()
    }

    fn after_filter_change(&mut self) -> Option<ViewportCommand> {
        self.selection.reset();
        fit_all(self.filter.filtered())
    }

    // ========== Selection ==========

    /// Selects a filtered issue by id, from any entry point.
    ///
    /// # Errors
    ///
    /// `DashboardError::IssueNotFound` when the id is not among the filtered
    /// issues; the current state is left untouched.
    pub fn select_by_id(
        &mut self,
        id: &IssueId,
        origin: SelectOrigin,
    ) -> DashboardResult<Option<ViewportCommand>> {
        let issue = self
            .filter
            .filtered()
            .iter()
            .find(|issue| &issue.id == id)
            .cloned()
            .ok_or_else(|| DashboardError::IssueNotFound(id.clone()))?;
        Ok(self.selection.select(issue, origin))
    }

    /// No-op when nothing is selected.
    pub fn deselect(&mut self) -> Option<ViewportCommand> {
        self.selection.deselect(self.filter.filtered())
    }

    // ========== Views ==========

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    /// Switching into the map view drops the selection.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> Option<ViewportCommand> {
        let previous = std::mem::replace(&mut self.view, mode);
        if mode == ViewMode::Map && previous != ViewMode::Map {
            return self.deselect();
        }
        None
    }

    pub fn toggle_view(&mut self) -> Option<ViewportCommand> {
        match self.view {
            ViewMode::Table => self.set_view_mode(ViewMode::Map),
            ViewMode::Map => self.set_view_mode(ViewMode::Table),
        }
    }

    pub fn table_rows(&self) -> Vec<TableRow> {
        table::table_rows(self.displayed(), self.selected().map(|issue| &issue.id))
    }

    pub fn list_entries(&self) -> Vec<ListEntry> {
        table::list_entries(self.displayed())
    }
}
