//! Map rendering
//!
//! Turns displayed issues into markers on a [`MapSurface`] and routes map
//! clicks back into the dashboard.

mod adapter;
mod config;
mod marker;
mod palette;
mod surface;

pub use adapter::{ClickOutcome, MapAdapter};
pub use config::{MapConfig, TileLayer, DEFAULT_FOCUS_ZOOM};
pub use marker::{build_markers, Marker, MarkerStyle, Popup};
pub use palette::{category_color, DEFAULT_MARKER_COLOR};
pub use surface::{MapSurface, MarkerLayer};

/// Geographic point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest box containing every point; `None` for no points.
    pub fn from_points(points: impl IntoIterator<Item = LatLng>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Bounds {
            south_west: first,
            north_east: first,
        };
        for p in points {
            bounds.south_west.lat = bounds.south_west.lat.min(p.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(p.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(p.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(p.lng);
        }
        Some(bounds)
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

/// Camera change requested by a state transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportCommand {
    /// Centre on one issue
    FocusOn { center: LatLng, zoom: u8 },
    /// Show every marker
    FitBounds { bounds: Bounds },
}
