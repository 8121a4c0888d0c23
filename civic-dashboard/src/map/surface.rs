//! Map surface abstraction

use super::{Bounds, LatLng, Marker, TileLayer};

/// The drawable map a concrete widget provides.
pub trait MapSurface {
    fn set_tile_layer(&mut self, layer: &TileLayer);
    fn clear_markers(&mut self);
    fn add_marker(&mut self, marker: Marker);
    fn set_view(&mut self, center: LatLng, zoom: u8);
    fn fit_bounds(&mut self, bounds: Bounds, padding: u32);
}

/// In-memory surface: keeps whatever is currently drawn.
#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    pub tile_layer: Option<TileLayer>,
    pub markers: Vec<Marker>,
    pub center: Option<LatLng>,
    pub zoom: Option<u8>,
    pub fitted: Option<Bounds>,
    /// Number of `clear_markers` calls
    pub clears: usize,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.selected)
    }
}

impl MapSurface for MarkerLayer {
    fn set_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layer = Some(layer.clone());
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
        self.clears += 1;
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.center = Some(center);
        self.zoom = Some(zoom);
        self.fitted = None;
    }

    fn fit_bounds(&mut self, bounds: Bounds, _padding: u32) {
        self.center = Some(bounds.center());
        self.fitted = Some(bounds);
    }
}
