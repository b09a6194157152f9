//! Map lifecycle: initialization, the live marker, teardown.

use crate::backend::{MapBackend, TileSource};
use crate::geo::LatLng;
use crate::icon::{live_marker_icon, marker_icon};
use crate::marker::{Marker, MarkerId, Popup};
use crate::spot::Spot;
use crate::viewport::{Viewport, OVERVIEW_ZOOM};
use crate::MapError;

/// Pixel width of a point-of-interest pin
const SPOT_ICON_SIZE: u32 = 24;

/// Pixel width of the "you are here" pin
const LIVE_ICON_SIZE: u32 = 28;

/// Map initialization settings
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Attachment point understood by the rendering backend
    pub container: String,
    pub center: LatLng,
    pub zoom: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container: "map".to_string(),
            center: LatLng::new(14.0583, 108.2772),
            zoom: OVERVIEW_ZOOM,
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
        }
    }
}

/// A live map: viewport, spot markers, and the singleton live marker.
///
/// The handle owns every marker it creates. `teardown` consumes the handle,
/// so a torn-down map cannot be touched again.
pub struct MapHandle<B: MapBackend> {
    backend: B,
    viewport: Viewport,
    markers: Vec<MarkerId>,
    live_marker: Option<MarkerId>,
    next_marker_id: MarkerId,
}

impl<B: MapBackend> MapHandle<B> {
    /// Create the map view and render every spot as a marker with a popup.
    ///
    /// Fails fast on an unknown container or a backend refusal; a container
    /// can host at most one view per lifetime.
    pub fn initialize(config: &MapConfig, mut backend: B, spots: &[Spot]) -> Result<Self, MapError> {
        if config.container.is_empty() || !backend.container_exists(&config.container) {
            return Err(MapError::InvalidContainer(config.container.clone()));
        }

        let viewport = Viewport::new(config.center, config.zoom);
        let tiles = TileSource {
            url_template: config.tile_url.clone(),
            attribution: config.attribution.clone(),
        };
        backend.create_view(&config.container, &viewport, &tiles)?;

        let mut handle = Self {
            backend,
            viewport,
            markers: Vec::new(),
            live_marker: None,
            next_marker_id: 1,
        };

        for spot in spots {
            let marker = Marker {
                id: handle.allocate_marker_id(),
                position: spot.coords,
                icon: marker_icon(SPOT_ICON_SIZE),
                popup: Some(Popup::new(&spot.name, &spot.description)),
            };
            handle.backend.add_marker(&marker);
            handle.markers.push(marker.id);
        }

        tracing::info!(
            container = %config.container,
            spots = spots.len(),
            "map initialized"
        );
        Ok(handle)
    }

    /// Replace the live marker with one at `position` and focus the view there.
    ///
    /// The live marker is a singleton: the previous one is removed, never
    /// accumulated.
    pub fn show_user_position(&mut self, position: LatLng, accuracy: Option<f64>) {
        if let Some(stale) = self.live_marker.take() {
            self.backend.remove_marker(stale);
            self.markers.retain(|&id| id != stale);
        }

        let body = match accuracy {
            Some(accuracy) => format!("within {:.0} m", accuracy),
            None => "current position".to_string(),
        };
        let marker = Marker {
            id: self.allocate_marker_id(),
            position,
            icon: live_marker_icon(LIVE_ICON_SIZE),
            popup: Some(Popup::new("You are here", &body)),
        };
        self.backend.add_marker(&marker);
        self.markers.push(marker.id);
        self.live_marker = Some(marker.id);

        self.viewport.focus_on(position);
        self.backend.set_view(&self.viewport);

        tracing::debug!(lat = position.lat, lng = position.lng, "map focused on user position");
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Number of markers currently placed, live marker included
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn has_live_marker(&self) -> bool {
        self.live_marker.is_some()
    }

    /// Remove every marker and release the backend view. Consumes the handle.
    pub fn teardown(mut self) -> B {
        for id in self.markers.drain(..) {
            self.backend.remove_marker(id);
        }
        self.backend.destroy_view();
        tracing::info!("map torn down");
        self.backend
    }

    fn allocate_marker_id(&mut self) -> MarkerId {
        let id = self.next_marker_id;
        self.next_marker_id += 1;
        id
    }
}
