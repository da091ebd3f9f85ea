//! Repository trait for directory data access.

use crate::domain::entities::{
    Category, DirectorySeed, DirectoryStats, ImportSummary, NewResource, Region, Resource,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Optional store-side narrowing of the approved resource list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceQuery {
    pub category_slug: Option<String>,
    pub region_id: Option<String>,
}

impl ResourceQuery {
    /// Builds a query from listing criteria fields; empty strings mean "any".
    pub fn from_fields(category_slug: &str, region_id: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_owned());
        Self {
            category_slug: non_empty(category_slug),
            region_id: non_empty(region_id),
        }
    }
}

/// Repository interface for the resource store.
///
/// Read queries only ever return approved resources, ordered by title.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgResourceRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryResourceRepository`] - In-memory, seeded from JSON
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Lists all categories ordered by title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_categories(&self) -> Result<Vec<Category>, AppError>;

    /// Lists all regions ordered by title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_regions(&self) -> Result<Vec<Region>, AppError>;

    /// Finds a category by id.
    async fn find_category(&self, id: &str) -> Result<Option<Category>, AppError>;

    /// Finds a region by id.
    async fn find_region(&self, id: &str) -> Result<Option<Region>, AppError>;

    /// Lists approved resources ordered by title, optionally narrowed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_resources(&self, query: ResourceQuery) -> Result<Vec<Resource>, AppError>;

    /// Finds a single approved resource by slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Resource))` if found and approved
    /// - `Ok(None)` otherwise
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Resource>, AppError>;

    /// Stores a public submission with `approved = false`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id or slug is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create_submission(&self, new_resource: NewResource) -> Result<Resource, AppError>;

    /// Lists unapproved submissions, oldest first.
    async fn list_pending(&self) -> Result<Vec<Resource>, AppError>;

    /// Approves a pending resource.
    ///
    /// Returns `Ok(true)` if a pending resource was approved, `Ok(false)` if no
    /// pending resource has that slug.
    async fn approve(&self, slug: &str) -> Result<bool, AppError>;

    /// Re-points every resource of category `from_id` to `into_id` and deletes
    /// `from_id`. Returns the number of resources moved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either category does not exist.
    async fn merge_category(&self, from_id: &str, into_id: &str) -> Result<u64, AppError>;

    /// Upserts categories, regions and resources from a seed.
    async fn import_seed(&self, seed: DirectorySeed) -> Result<ImportSummary, AppError>;

    /// Returns aggregate counts.
    async fn stats(&self) -> Result<DirectoryStats, AppError>;
}
