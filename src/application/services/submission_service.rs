//! Public resource submissions.

use std::sync::Arc;

use serde_json::json;
use tracing::info;
use validator::ValidateEmail;

use crate::domain::entities::{NewResource, Resource};
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;
use crate::utils::slug::slugify;

/// Raw submission fields as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionInput {
    pub title: String,
    pub category_id: String,
    pub region_id: String,
    pub address: String,
    pub description: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Service accepting resource submissions for later review.
///
/// Submissions are stored unapproved; they never show up in listings until
/// an operator approves them.
pub struct SubmissionService<R: ResourceRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ResourceRepository + ?Sized> SubmissionService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and stores a submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - a required field is missing or blank
    /// - the email is malformed
    /// - the category or region does not exist
    /// - the title has no characters usable in a slug
    ///
    /// Returns [`AppError::Conflict`] if a resource with the same slug exists.
    pub async fn submit(&self, input: SubmissionInput) -> Result<Resource, AppError> {
        let title = input.title.trim();
        let category_id = input.category_id.trim();
        let region_id = input.region_id.trim();
        let address = input.address.trim();
        let description = input.description.trim();

        let missing: Vec<&str> = [
            ("title", title),
            ("categoryId", category_id),
            ("regionId", region_id),
            ("address", address),
            ("description", description),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::bad_request(
                "Missing required fields",
                json!({ "missing": missing }),
            ));
        }

        let phone = normalize_optional(input.phone);
        let email = normalize_optional(input.email);

        if let Some(email) = &email
            && !email.validate_email()
        {
            return Err(AppError::bad_request(
                "Invalid email address",
                json!({ "email": email }),
            ));
        }

        if self.repository.find_category(category_id).await?.is_none() {
            return Err(AppError::bad_request(
                "Unknown category",
                json!({ "categoryId": category_id }),
            ));
        }
        if self.repository.find_region(region_id).await?.is_none() {
            return Err(AppError::bad_request(
                "Unknown region",
                json!({ "regionId": region_id }),
            ));
        }

        let slug = slugify(title);
        if slug.is_empty() {
            return Err(AppError::bad_request(
                "Title must contain letters or digits",
                json!({ "title": title }),
            ));
        }

        let new_resource = NewResource {
            id: format!("resource-{slug}"),
            title: title.to_owned(),
            slug,
            category_id: category_id.to_owned(),
            region_id: region_id.to_owned(),
            address: address.to_owned(),
            description: description.to_owned(),
            phone,
            email,
        };

        let resource = self.repository.create_submission(new_resource).await?;
        info!(id = %resource.id, "Resource submitted for review");
        Ok(resource)
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Category, Region};
    use crate::domain::repositories::MockResourceRepository;

    fn input() -> SubmissionInput {
        SubmissionInput {
            title: "  Sewa Free Clinic ".to_string(),
            category_id: "category-free-clinic".to_string(),
            region_id: "region-maninagar".to_string(),
            address: "Near Maninagar station".to_string(),
            description: "Free OPD on weekdays".to_string(),
            phone: Some("   ".to_string()),
            email: Some(" clinic@example.org ".to_string()),
        }
    }

    fn repo_with_vocabulary() -> MockResourceRepository {
        let mut repo = MockResourceRepository::new();
        repo.expect_find_category().returning(|id| {
            Ok(Some(Category::new(id, "Free Clinic / OPD", "free-clinic")))
        });
        repo.expect_find_region()
            .returning(|id| Ok(Some(Region::new(id, "Maninagar", None))));
        repo
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut repo = repo_with_vocabulary();
        repo.expect_create_submission()
            .withf(|n| {
                n.id == "resource-sewa-free-clinic"
                    && n.slug == "sewa-free-clinic"
                    && n.title == "Sewa Free Clinic"
                    && n.phone.is_none()
                    && n.email.as_deref() == Some("clinic@example.org")
            })
            .times(1)
            .returning(|n| {
                let mut r = Resource::new(n.id, n.title, n.slug);
                r.approved = false;
                Ok(r)
            });

        let service = SubmissionService::new(Arc::new(repo));
        let created = service.submit(input()).await.unwrap();

        assert_eq!(created.id, "resource-sewa-free-clinic");
        assert!(!created.approved);
    }

    #[tokio::test]
    async fn test_submit_missing_fields() {
        let mut repo = MockResourceRepository::new();
        repo.expect_create_submission().times(0);

        let service = SubmissionService::new(Arc::new(repo));
        let result = service
            .submit(SubmissionInput {
                title: "Clinic".to_string(),
                address: "  ".to_string(),
                ..Default::default()
            })
            .await;

        match result {
            Err(AppError::Validation { message, details }) => {
                assert_eq!(message, "Missing required fields");
                assert_eq!(
                    details["missing"],
                    json!(["categoryId", "regionId", "address", "description"])
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_invalid_email() {
        let service = SubmissionService::new(Arc::new(MockResourceRepository::new()));
        let result = service
            .submit(SubmissionInput {
                email: Some("not-an-email".to_string()),
                ..input()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_submit_unknown_category() {
        let mut repo = MockResourceRepository::new();
        repo.expect_find_category().returning(|_| Ok(None));
        repo.expect_create_submission().times(0);

        let service = SubmissionService::new(Arc::new(repo));
        let result = service.submit(input()).await;

        match result {
            Err(AppError::Validation { message, .. }) => assert_eq!(message, "Unknown category"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_title_without_slug_characters() {
        let service = SubmissionService::new(Arc::new(repo_with_vocabulary()));
        let result = service
            .submit(SubmissionInput {
                title: "***".to_string(),
                ..input()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_submit_conflict_propagates() {
        let mut repo = repo_with_vocabulary();
        repo.expect_create_submission()
            .returning(|_| Err(AppError::conflict("taken", json!({}))));

        let service = SubmissionService::new(Arc::new(repo));
        let result = service.submit(input()).await;
        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }
}
