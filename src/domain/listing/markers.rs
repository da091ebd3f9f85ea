//! Marker projection from the filtered resource set.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Resource;

/// A map pin derived from a resource with known coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_title: Option<String>,
}

/// Projects the filtered resources onto map markers, preserving order.
///
/// Resources without both coordinates are dropped.
pub fn project_markers(filtered: &[Resource]) -> Vec<MapMarker> {
    filtered
        .iter()
        .filter_map(|resource| {
            let (latitude, longitude) = resource.coordinates()?;
            Some(MapMarker {
                id: resource.id.clone(),
                title: resource.title.clone(),
                latitude,
                longitude,
                category_title: resource.category_title().map(str::to_owned),
            })
        })
        .collect()
}

/// Initial center and zoom of the map pane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
}

impl Default for MapViewport {
    /// Central Ahmedabad at city zoom.
    fn default() -> Self {
        Self {
            center_lat: 23.0225,
            center_lng: 72.5714,
            zoom: 12,
        }
    }
}
