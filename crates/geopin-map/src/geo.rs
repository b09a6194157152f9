//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlng() {
        let point = LatLng::new(14.0583, 108.2772);
        assert_eq!(point.lat, 14.0583);
        assert_eq!(point.lng, 108.2772);
    }
}
