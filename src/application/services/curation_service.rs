//! Operator changes to stored resources.
//!
//! Every mutation here evicts the cached details of the resources it touches,
//! so the detail page never outlives an approval, a merge or an import by a
//! cache TTL.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{DirectorySeed, ImportSummary};
use crate::domain::repositories::{ResourceQuery, ResourceRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::slug::slugify;

/// Outcome of a cache eviction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Eviction {
    pub evicted: usize,
    /// Slugs whose cache entry could not be removed.
    pub failed: Vec<String>,
}

pub struct CurationService<R: ResourceRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
}

impl<R: ResourceRepository + ?Sized> CurationService<R> {
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Publishes a pending submission. Returns false if none has this slug.
    pub async fn approve(&self, slug: &str) -> Result<(bool, Eviction), AppError> {
        let approved = self.repository.approve(slug).await?;
        let eviction = if approved {
            self.evict([slug.to_owned()]).await
        } else {
            Eviction::default()
        };
        Ok((approved, eviction))
    }

    /// Folds `from_id` into `into_id` and evicts every moved resource.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either category is missing.
    pub async fn merge_category(
        &self,
        from_id: &str,
        into_id: &str,
    ) -> Result<(u64, Eviction), AppError> {
        let from = self.repository.find_category(from_id).await?.ok_or_else(|| {
            AppError::not_found("Category not found", json!({ "id": from_id }))
        })?;

        let affected = self
            .repository
            .list_resources(ResourceQuery::from_fields(&from.slug, ""))
            .await?;

        let moved = self.repository.merge_category(from_id, into_id).await?;
        info!(from = from_id, into = into_id, moved, "Merged categories");

        let eviction = self.evict(affected.into_iter().map(|r| r.slug)).await;
        Ok((moved, eviction))
    }

    /// Upserts a seed and evicts both the old and the new slug of every
    /// resource it rewrites.
    pub async fn import_seed(
        &self,
        seed: DirectorySeed,
    ) -> Result<(ImportSummary, Eviction), AppError> {
        let existing = self
            .repository
            .list_resources(ResourceQuery::default())
            .await?;

        let mut slugs = BTreeSet::new();
        for doc in &seed.resources {
            slugs.insert(doc.slug.clone().unwrap_or_else(|| slugify(&doc.title)));
            if let Some(previous) = existing.iter().find(|r| r.id == doc.id) {
                slugs.insert(previous.slug.clone());
            }
        }

        let summary = self.repository.import_seed(seed).await?;
        let eviction = self.evict(slugs).await;
        Ok((summary, eviction))
    }

    async fn evict(&self, slugs: impl IntoIterator<Item = String>) -> Eviction {
        let mut eviction = Eviction::default();
        for slug in slugs {
            match self.cache.invalidate(&slug).await {
                Ok(()) => eviction.evicted += 1,
                Err(e) => {
                    warn!("Failed to invalidate cached resource {}: {}", slug, e);
                    eviction.failed.push(slug);
                }
            }
        }
        eviction
    }
}
