//! Civic Dashboard - admin Issues dashboard core
//!
//! Framework-independent state for the Issues dashboard:
//!
//! - [`status`]: derived status classification
//! - [`filter`]: status/category filter engine
//! - [`selection`]: single-issue selection and view sync
//! - [`map`]: marker building and map click handling
//! - [`table`]: table rows and sidebar list entries
//! - [`dashboard`]: the composed dashboard state
//!
//! plus the [`transcription`] capability and [`media`] URL validation used by
//! the video widgets.

pub mod dashboard;
pub mod error;
pub mod filter;
pub mod map;
pub mod media;
pub mod selection;
pub mod status;
pub mod table;
pub mod transcription;

pub use dashboard::{FetchStatus, IssueSource, IssuesDashboard, ViewMode};
pub use error::{DashboardError, DashboardResult};
pub use filter::FilterEngine;
pub use map::{ClickOutcome, MapAdapter, MapConfig, MapSurface, Marker, MarkerLayer, ViewportCommand};
pub use selection::{SelectOrigin, SelectionCoordinator};
pub use status::classify;
