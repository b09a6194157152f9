//! Rendering backend interface.
//!
//! The tile-rendering pipeline is an external collaborator; the engine only
//! talks to it through this trait. `HeadlessBackend` records every operation
//! so tests and demos can run without a real renderer.

use std::collections::{HashMap, HashSet};

use crate::geo::LatLng;
use crate::marker::{Marker, MarkerId};
use crate::viewport::Viewport;
use crate::MapError;

/// Tile-source configuration handed to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSource {
    /// URL template with `{z}/{x}/{y}` placeholders
    pub url_template: String,
    pub attribution: String,
}

/// Opaque map rendering backend
pub trait MapBackend {
    /// Whether `container` names a real attachment point
    fn container_exists(&self, container: &str) -> bool;

    /// Create the map view inside `container`
    fn create_view(
        &mut self,
        container: &str,
        viewport: &Viewport,
        tiles: &TileSource,
    ) -> Result<(), MapError>;

    /// Move the view to a new center/zoom
    fn set_view(&mut self, viewport: &Viewport);

    /// Place a marker, with its popup if one is bound
    fn add_marker(&mut self, marker: &Marker);

    /// Remove a previously placed marker
    fn remove_marker(&mut self, id: MarkerId);

    /// Release the view and everything attached to it
    fn destroy_view(&mut self);
}

/// In-memory backend recording every operation
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    containers: HashSet<String>,
    bound: HashSet<String>,
    view: Option<Viewport>,
    markers: HashMap<MarkerId, LatLng>,
    destroyed: bool,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a valid container name
    pub fn with_container(mut self, container: &str) -> Self {
        self.containers.insert(container.to_string());
        self
    }

    /// Current view, if one was created and not destroyed
    pub fn view(&self) -> Option<&Viewport> {
        self.view.as_ref()
    }

    /// Positions of all currently placed markers
    pub fn marker_positions(&self) -> Vec<LatLng> {
        self.markers.values().copied().collect()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl MapBackend for HeadlessBackend {
    fn container_exists(&self, container: &str) -> bool {
        self.containers.contains(container)
    }

    fn create_view(
        &mut self,
        container: &str,
        viewport: &Viewport,
        _tiles: &TileSource,
    ) -> Result<(), MapError> {
        if !self.bound.insert(container.to_string()) {
            return Err(MapError::ContainerInUse(container.to_string()));
        }
        self.view = Some(*viewport);
        Ok(())
    }

    fn set_view(&mut self, viewport: &Viewport) {
        self.view = Some(*viewport);
    }

    fn add_marker(&mut self, marker: &Marker) {
        self.markers.insert(marker.id, marker.position);
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.remove(&id);
    }

    fn destroy_view(&mut self) {
        self.markers.clear();
        self.view = None;
        self.destroyed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::marker_icon;

    #[test]
    fn test_rejects_rebinding_container() {
        let mut backend = HeadlessBackend::new().with_container("map");
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 6.0);
        let tiles = TileSource {
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
        };

        backend.create_view("map", &viewport, &tiles).unwrap();
        assert!(matches!(
            backend.create_view("map", &viewport, &tiles),
            Err(MapError::ContainerInUse(_))
        ));
    }

    #[test]
    fn test_destroy_releases_markers() {
        let mut backend = HeadlessBackend::new();
        backend.add_marker(&Marker {
            id: 1,
            position: LatLng::new(1.0, 2.0),
            icon: marker_icon(24),
            popup: None,
        });
        assert_eq!(backend.marker_positions(), vec![LatLng::new(1.0, 2.0)]);

        backend.destroy_view();

        assert_eq!(backend.marker_count(), 0);
        assert!(backend.is_destroyed());
    }
}
