//! Geographic position data.

use serde::{Deserialize, Serialize};

/// A single position fix reported by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Accuracy radius in meters, when the sensor reports one
    pub accuracy: Option<f64>,
}

impl GeoPosition {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            accuracy: None,
        }
    }

    pub fn with_accuracy(lat: f64, lng: f64, accuracy: f64) -> Self {
        Self {
            lat,
            lng,
            accuracy: Some(accuracy),
        }
    }
}
