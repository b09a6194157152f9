//! Geopin map engine
//!
//! Owns the map viewport and its markers over an opaque rendering backend.
//!
//! # Features
//! - Viewport with distinct overview and focus zoom levels
//! - Static point-of-interest markers with bound popups
//! - Singleton "you are here" marker, replaced on every new fix
//! - Self-contained SVG marker icons (no network fetch)
//! - Headless backend for tests and demos

pub mod backend;
pub mod engine;
pub mod geo;
pub mod icon;
pub mod marker;
pub mod spot;
pub mod viewport;

use thiserror::Error;

pub use backend::{HeadlessBackend, MapBackend, TileSource};
pub use engine::{MapConfig, MapHandle};
pub use geo::LatLng;
pub use icon::{live_marker_icon, marker_icon, IconResource};
pub use marker::{Marker, MarkerId, Popup};
pub use spot::{spots_from_json, Spot};
pub use viewport::{Viewport, FOCUS_ZOOM, OVERVIEW_ZOOM};

/// Map engine error
#[derive(Debug, Error)]
pub enum MapError {
    #[error("invalid map container: {0}")]
    InvalidContainer(String),

    #[error("map container already in use: {0}")]
    ContainerInUse(String),

    #[error("map backend error: {0}")]
    Backend(String),

    #[error("spot feed error: {0}")]
    SpotFeed(#[from] serde_json::Error),
}
