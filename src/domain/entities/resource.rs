//! Resource entity representing a community-service listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category reference embedded in a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub title: String,
    pub slug: String,
}

/// Region reference embedded in a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRef {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

/// Geographic point in floating-point degrees.
///
/// Both coordinates are independently optional because stored documents may
/// carry a half-filled location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    /// Returns `(lat, lng)` when both coordinates are present and finite.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }
}

/// Optional contact channels of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socials: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none()
            && self.email.is_none()
            && self.website.is_none()
            && self.socials.is_none()
    }
}

/// A community resource with its category and region resolved.
///
/// Immutable from the listing core's point of view; only the store creates or
/// changes resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: Option<CategoryRef>,
    pub region: Option<RegionRef>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub location: Option<GeoPoint>,
    pub contact: Option<ContactInfo>,
    #[serde(default)]
    pub services: Vec<String>,
    pub eligibility: Option<String>,
    pub featured_image_url: Option<String>,
    pub approved: bool,
    /// When the store first saw the resource. Unknown for seed records
    /// held in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource {
    /// Creates an approved resource with only the identifying fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            category: None,
            region: None,
            description: None,
            address: None,
            location: None,
            contact: None,
            services: Vec::new(),
            eligibility: None,
            featured_image_url: None,
            approved: true,
            created_at: None,
        }
    }

    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.slug.as_str())
    }

    pub fn category_title(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.title.as_str())
    }

    pub fn region_id(&self) -> Option<&str> {
        self.region.as_ref().map(|r| r.id.as_str())
    }

    pub fn region_title(&self) -> Option<&str> {
        self.region.as_ref().map(|r| r.title.as_str())
    }

    /// Returns `(lat, lng)` when the resource can be placed on a map.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.location.as_ref().and_then(GeoPoint::coordinates)
    }
}

/// A stored resource document whose category and region are held by id.
///
/// This is the shape of records in seed files and in the in-memory store;
/// reads resolve the ids into [`CategoryRef`] / [`RegionRef`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDocument {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub region_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub contact: Option<ContactInfo>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub eligibility: Option<String>,
    #[serde(default)]
    pub featured_image_url: Option<String>,
    #[serde(default = "default_approved")]
    pub approved: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_approved() -> bool {
    true
}

/// Input data for a public submission.
///
/// Submissions are stored unapproved and stay invisible to listing queries
/// until approved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category_id: String,
    pub region_id: String,
    pub address: String,
    pub description: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}
