//! Map markers and popups.

use crate::geo::LatLng;
use crate::icon::IconResource;

/// Marker ID within one map handle
pub type MarkerId = u64;

/// Popup content bound to a marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub body: String,
}

impl Popup {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// A placed marker
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub position: LatLng,
    pub icon: IconResource,
    pub popup: Option<Popup>,
}
