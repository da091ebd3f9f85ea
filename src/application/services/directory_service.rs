//! Read-side directory service: vocabulary, listings and resource details.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{Category, Region, Resource};
use crate::domain::listing::{
    DirectorySnapshot, FilterCriteria, MapMarker, MapViewport, filter_resources, project_markers,
    result_label,
};
use crate::domain::repositories::{ResourceQuery, ResourceRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Id and title pairs offered by the submission form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOptions {
    pub categories: Vec<(String, String)>,
    pub regions: Vec<(String, String)>,
}

/// Result of a filtered listing query.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub resources: Vec<Resource>,
    pub markers: Vec<MapMarker>,
    pub result_label: String,
    pub has_filters: bool,
    pub lacks_location_data: bool,
    pub viewport: MapViewport,
}

/// Service for reading the directory.
///
/// Generic over the repository so tests can plug in mocks; `?Sized` lets the
/// server hold a trait object chosen at startup.
pub struct DirectoryService<R: ResourceRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    viewport: MapViewport,
    cache_ttl: Option<u64>,
}

impl<R: ResourceRepository + ?Sized> DirectoryService<R> {
    /// Creates a new directory service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>, viewport: MapViewport) -> Self {
        Self {
            repository,
            cache,
            viewport,
            cache_ttl: None,
        }
    }

    /// Overrides the cache backend's default TTL for resource details.
    pub fn with_cache_ttl(mut self, ttl_seconds: u64) -> Self {
        self.cache_ttl = Some(ttl_seconds);
        self
    }

    pub fn viewport(&self) -> MapViewport {
        self.viewport
    }

    pub async fn categories(&self) -> Result<Vec<Category>, AppError> {
        self.repository.list_categories().await
    }

    pub async fn regions(&self) -> Result<Vec<Region>, AppError> {
        self.repository.list_regions().await
    }

    /// Loads both vocabularies concurrently as form options.
    pub async fn form_options(&self) -> Result<FormOptions, AppError> {
        let (categories, regions) = tokio::try_join!(
            self.repository.list_categories(),
            self.repository.list_regions()
        )?;

        Ok(FormOptions {
            categories: categories.into_iter().map(|c| (c.id, c.title)).collect(),
            regions: regions.into_iter().map(|r| (r.id, r.title)).collect(),
        })
    }

    /// Loads resources, categories and regions concurrently.
    ///
    /// # Errors
    ///
    /// Fails as a whole if any of the three reads fails.
    pub async fn snapshot(&self) -> Result<DirectorySnapshot, AppError> {
        let (resources, categories, regions) = tokio::try_join!(
            self.repository.list_resources(ResourceQuery::default()),
            self.repository.list_categories(),
            self.repository.list_regions()
        )?;

        debug!(
            resources = resources.len(),
            categories = categories.len(),
            regions = regions.len(),
            "Loaded directory snapshot"
        );

        Ok(DirectorySnapshot {
            resources,
            categories,
            regions,
        })
    }

    /// Runs a filtered listing.
    ///
    /// Category and region are pushed down to the store; the filter engine
    /// then applies all three criteria so the result is the same either way.
    pub async fn listing(&self, criteria: &FilterCriteria) -> Result<Listing, AppError> {
        let query = ResourceQuery::from_fields(&criteria.category_slug, &criteria.region_id);
        debug!(?query, search = %criteria.search_text, "Listing resources");

        let candidates = self.repository.list_resources(query).await?;
        let resources = filter_resources(&candidates, criteria);
        let markers = project_markers(&resources);

        Ok(Listing {
            result_label: result_label(resources.len()),
            has_filters: criteria.has_filters(),
            lacks_location_data: markers.is_empty() && !resources.is_empty(),
            resources,
            markers,
            viewport: self.viewport,
        })
    }

    /// Looks up one approved resource, going through the cache first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no approved resource has this slug.
    pub async fn resource_by_slug(&self, slug: &str) -> Result<Resource, AppError> {
        if let Ok(Some(resource)) = self.cache.get_resource(slug).await {
            return Ok(resource);
        }

        let resource = self
            .repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Resource not found", json!({ "slug": slug })))?;

        if let Err(e) = self.cache.set_resource(&resource, self.cache_ttl).await {
            warn!("Failed to cache resource {}: {}", slug, e);
        }

        Ok(resource)
    }

    /// Checks that the store answers a trivial read.
    pub async fn store_healthy(&self) -> bool {
        match self.repository.stats().await {
            Ok(_) => true,
            Err(e) => {
                warn!("Store health check failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CategoryRef, GeoPoint, RegionRef};
    use crate::domain::repositories::MockResourceRepository;
    use crate::infrastructure::cache::NullCache;

    fn resource(id: &str, title: &str, category: &str, located: bool) -> Resource {
        let mut r = Resource::new(id, title, id);
        r.category = Some(CategoryRef {
            id: format!("category-{category}"),
            title: category.to_string(),
            slug: category.to_string(),
        });
        r.region = Some(RegionRef {
            id: "region-navrangpura".to_string(),
            title: "Navrangpura".to_string(),
            pincode: None,
        });
        if located {
            r.location = Some(GeoPoint::new(23.03, 72.56));
        }
        r
    }

    fn service(repo: MockResourceRepository) -> DirectoryService<MockResourceRepository> {
        DirectoryService::new(
            Arc::new(repo),
            Arc::new(NullCache::new()),
            MapViewport::default(),
        )
    }

    #[tokio::test]
    async fn test_listing_pushes_down_category_and_filters_search() {
        let mut repo = MockResourceRepository::new();
        repo.expect_list_resources()
            .withf(|q| q.category_slug.as_deref() == Some("library") && q.region_id.is_none())
            .times(1)
            .returning(|_| {
                Ok(vec![
                    resource("a", "City Library", "library", true),
                    resource("b", "M.J. Library", "library", false),
                ])
            });

        let criteria = FilterCriteria::new("city", "library", "");
        let listing = service(repo).listing(&criteria).await.unwrap();

        assert_eq!(listing.resources.len(), 1);
        assert_eq!(listing.markers.len(), 1);
        assert_eq!(listing.result_label, "1 result");
        assert!(listing.has_filters);
        assert!(!listing.lacks_location_data);
    }

    #[tokio::test]
    async fn test_listing_reports_missing_location_data() {
        let mut repo = MockResourceRepository::new();
        repo.expect_list_resources()
            .returning(|_| Ok(vec![resource("b", "M.J. Library", "library", false)]));

        let listing = service(repo)
            .listing(&FilterCriteria::default())
            .await
            .unwrap();

        assert!(listing.markers.is_empty());
        assert!(listing.lacks_location_data);
        assert!(!listing.has_filters);
    }

    #[tokio::test]
    async fn test_snapshot_fails_when_any_read_fails() {
        let mut repo = MockResourceRepository::new();
        repo.expect_list_resources().returning(|_| Ok(vec![]));
        repo.expect_list_categories()
            .returning(|| Err(AppError::internal("Database error", json!({}))));
        repo.expect_list_regions().returning(|| Ok(vec![]));

        let result = service(repo).snapshot().await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_form_options_pairs() {
        let mut repo = MockResourceRepository::new();
        repo.expect_list_categories()
            .returning(|| Ok(vec![Category::new("category-gym", "Gym", "gym")]));
        repo.expect_list_regions().returning(|| {
            Ok(vec![Region::new(
                "region-paldi",
                "Paldi",
                Some("380007".to_string()),
            )])
        });

        let options = service(repo).form_options().await.unwrap();
        assert_eq!(
            options.categories,
            vec![("category-gym".to_string(), "Gym".to_string())]
        );
        assert_eq!(
            options.regions,
            vec![("region-paldi".to_string(), "Paldi".to_string())]
        );
    }

    #[tokio::test]
    async fn test_resource_by_slug_not_found() {
        let mut repo = MockResourceRepository::new();
        repo.expect_find_by_slug()
            .withf(|slug| slug == "missing")
            .times(1)
            .returning(|_| Ok(None));

        let result = service(repo).resource_by_slug("missing").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resource_by_slug_found() {
        let mut repo = MockResourceRepository::new();
        repo.expect_find_by_slug()
            .returning(|_| Ok(Some(resource("a", "City Library", "library", true))));

        let found = service(repo).resource_by_slug("a").await.unwrap();
        assert_eq!(found.title, "City Library");
    }
}
