//! DTOs for resource listing and detail endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

use crate::application::services::Listing;
use crate::domain::entities::{ContactInfo, GeoPoint, Resource};
use crate::domain::listing::{FilterCriteria, MapMarker, MapViewport};

/// Query parameters of `GET /api/resources`.
///
/// Empty parameters (`?category=`) are treated as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub search: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub category: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub region: Option<String>,
}

impl ListingQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.search.clone().unwrap_or_default(),
            self.category.clone().unwrap_or_default(),
            self.region.clone().unwrap_or_default(),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub id: String,
    pub title: String,
    pub slug: String,
}

#[derive(Debug, Serialize)]
pub struct RegionSummary {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

/// A resource as returned by the API.
#[derive(Debug, Serialize)]
pub struct ResourceItem {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: Option<CategorySummary>,
    pub region: Option<RegionSummary>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub location: Option<GeoPoint>,
    pub contact: Option<ContactInfo>,
    pub services: Vec<String>,
    pub eligibility: Option<String>,
    pub featured_image_url: Option<String>,
}

impl From<Resource> for ResourceItem {
    fn from(r: Resource) -> Self {
        Self {
            id: r.id,
            title: r.title,
            slug: r.slug,
            category: r.category.map(|c| CategorySummary {
                id: c.id,
                title: c.title,
                slug: c.slug,
            }),
            region: r.region.map(|g| RegionSummary {
                id: g.id,
                title: g.title,
                pincode: g.pincode,
            }),
            description: r.description,
            address: r.address,
            location: r.location,
            contact: r.contact,
            services: r.services,
            eligibility: r.eligibility,
            featured_image_url: r.featured_image_url,
        }
    }
}

/// Response of `GET /api/resources`.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub result_label: String,
    pub total: usize,
    pub has_filters: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
    pub viewport: MapViewport,
    pub items: Vec<ResourceItem>,
    pub markers: Vec<MapMarker>,
}

/// Shown when resources are listed but none of them can be placed on the map.
pub const NO_LOCATION_NOTICE: &str = "No location data for these resources";

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            result_label: listing.result_label,
            total: listing.resources.len(),
            has_filters: listing.has_filters,
            notice: listing.lacks_location_data.then_some(NO_LOCATION_NOTICE),
            viewport: listing.viewport,
            items: listing.resources.into_iter().map(ResourceItem::from).collect(),
            markers: listing.markers,
        }
    }
}
