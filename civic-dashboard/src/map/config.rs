//! Map configuration

use super::LatLng;

/// Zoom used when centring on a selected issue
pub const DEFAULT_FOCUS_ZOOM: u8 = 15;

/// Raster tile source, consumed opaquely by the map widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    /// `{z}/{x}/{y}` URL template
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl TileLayer {
    /// Esri World Imagery satellite tiles
    pub fn satellite() -> Self {
        Self {
            url_template:
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
                    .into(),
            attribution: "Tiles &copy; Esri &mdash; Source: Esri, Maxar, Earthstar Geographics".into(),
            max_zoom: 19,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub tile_layer: TileLayer,
    /// Initial centre before any issues are loaded
    pub default_center: LatLng,
    pub default_zoom: u8,
    pub focus_zoom: u8,
    /// Pixels kept around fitted bounds
    pub fit_padding: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_layer: TileLayer::satellite(),
            default_center: LatLng::new(20.5937, 78.9629),
            default_zoom: 5,
            focus_zoom: DEFAULT_FOCUS_ZOOM,
            fit_padding: 50,
        }
    }
}
