//! Seed file format shared by the in-memory store and the `admin import` command.

use serde::{Deserialize, Serialize};

use super::{Category, Region, ResourceDocument};

/// A complete directory dump: vocabulary plus resource documents.
///
/// ```json
/// {
///   "categories": [{ "id": "category-library", "title": "Library", "slug": "library" }],
///   "regions": [{ "id": "region-ellisbridge", "title": "Ellisbridge", "pincode": "380006" }],
///   "resources": [{
///     "id": "resource-mj-library",
///     "title": "M.J. Library",
///     "category_id": "category-library",
///     "region_id": "region-ellisbridge",
///     "location": { "lat": 23.0225, "lng": 72.5714 }
///   }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub resources: Vec<ResourceDocument>,
}

/// Counts of records written by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub categories: usize,
    pub regions: usize,
    pub resources: usize,
}

/// Aggregate counts reported by the admin CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    pub categories: i64,
    pub regions: i64,
    pub approved_resources: i64,
    pub pending_resources: i64,
}
