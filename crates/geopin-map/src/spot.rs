//! Point-of-interest data.

use serde::{Deserialize, Serialize};

use crate::geo::LatLng;
use crate::MapError;

/// A static point of interest, supplied externally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub name: String,
    pub description: String,
    pub coords: LatLng,
}

/// Parse a JSON spot feed.
///
/// The feed is a JSON array of `{name, description, coords: {lat, lng}}`.
pub fn spots_from_json(feed: &str) -> Result<Vec<Spot>, MapError> {
    let spots: Vec<Spot> = serde_json::from_str(feed)?;
    tracing::debug!(count = spots.len(), "parsed spot feed");
    Ok(spots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed() {
        let feed = r#"[
            {"name": "Pongour Falls", "description": "Seven-tiered waterfall", "coords": {"lat": 11.6868, "lng": 108.3773}},
            {"name": "Hoan Kiem Lake", "description": "Lake in central Hanoi", "coords": {"lat": 21.0287, "lng": 105.8524}}
        ]"#;

        let spots = spots_from_json(feed).unwrap();
        assert_eq!(spots.len(), 2);
        assert_eq!(spots[0].name, "Pongour Falls");
        assert_eq!(spots[1].coords.lat, 21.0287);
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        assert!(spots_from_json("not json").is_err());
    }
}
