//! Category and region entities used as filter vocabulary.

use serde::{Deserialize, Serialize};

/// A resource category (e.g. "Library", "Free Clinic / OPD").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            icon_url: None,
        }
    }
}

/// A geographic grouping of resources, usually a neighbourhood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

impl Region {
    pub fn new(id: impl Into<String>, title: impl Into<String>, pincode: Option<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            pincode,
        }
    }

    /// Label used in region pickers, e.g. `Navrangpura (380009)`.
    pub fn label(&self) -> String {
        match &self.pincode {
            Some(pincode) if !pincode.is_empty() => format!("{} ({})", self.title, pincode),
            _ => self.title.clone(),
        }
    }
}
