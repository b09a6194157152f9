//! Map viewport.

use crate::geo::LatLng;

/// Zoom used when showing the full spot collection
pub const OVERVIEW_ZOOM: f64 = 6.0;

/// Zoom used when centering on a human-scale location
pub const FOCUS_ZOOM: f64 = 16.0;

/// Current center and zoom of the map view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Move the center to `point` at the focus zoom
    pub fn focus_on(&mut self, point: LatLng) {
        self.center = point;
        self.zoom = FOCUS_ZOOM;
    }
}
