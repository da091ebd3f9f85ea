//! DTOs for the public submission endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::SubmissionInput;

/// Body of `POST /api/resources`.
///
/// Missing fields deserialize as empty strings so the service can report all
/// of them at once; camelCase ids are accepted as sent by the web form.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SubmitResourceRequest {
    #[validate(length(max = 200, message = "Title is too long"))]
    pub title: String,

    #[serde(alias = "categoryId")]
    pub category_id: String,

    #[serde(alias = "regionId")]
    pub region_id: String,

    #[validate(length(max = 500, message = "Address is too long"))]
    pub address: String,

    #[validate(length(max = 5000, message = "Description is too long"))]
    pub description: String,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(length(max = 254))]
    pub email: Option<String>,
}

impl From<SubmitResourceRequest> for SubmissionInput {
    fn from(req: SubmitResourceRequest) -> Self {
        Self {
            title: req.title,
            category_id: req.category_id,
            region_id: req.region_id,
            address: req.address,
            description: req.description,
            phone: req.phone,
            email: req.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitResourceResponse {
    pub message: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_camel_case_ids() {
        let req: SubmitResourceRequest = serde_json::from_value(serde_json::json!({
            "title": "Sewa Clinic",
            "categoryId": "category-free-clinic",
            "regionId": "region-paldi"
        }))
        .unwrap();

        assert_eq!(req.category_id, "category-free-clinic");
        assert_eq!(req.region_id, "region-paldi");
        assert!(req.address.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_title() {
        let req = SubmitResourceRequest {
            title: "x".repeat(201),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
