//! DTOs for category, region and form option endpoints.

use serde::Serialize;

use crate::application::services::FormOptions;
use crate::domain::entities::{Category, Region};

#[derive(Debug, Serialize)]
pub struct CategoryItem {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl From<Category> for CategoryItem {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            title: c.title,
            slug: c.slug,
            icon_url: c.icon_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegionItem {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    /// Display label, e.g. `Navrangpura (380009)`.
    pub label: String,
}

impl From<Region> for RegionItem {
    fn from(r: Region) -> Self {
        let label = r.label();
        Self {
            id: r.id,
            title: r.title,
            pincode: r.pincode,
            label,
        }
    }
}

/// One entry of a select box.
#[derive(Debug, Serialize)]
pub struct OptionItem {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct FormOptionsResponse {
    pub categories: Vec<OptionItem>,
    pub regions: Vec<OptionItem>,
}

impl From<FormOptions> for FormOptionsResponse {
    fn from(options: FormOptions) -> Self {
        let to_items = |pairs: Vec<(String, String)>| {
            pairs
                .into_iter()
                .map(|(id, title)| OptionItem { id, title })
                .collect()
        };

        Self {
            categories: to_items(options.categories),
            regions: to_items(options.regions),
        }
    }
}
