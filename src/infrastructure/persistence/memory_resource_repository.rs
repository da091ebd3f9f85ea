//! In-memory implementation of the resource repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::path::Path;
use tokio::sync::RwLock;

use crate::domain::entities::{
    Category, CategoryRef, ContactInfo, DirectorySeed, DirectoryStats, ImportSummary, NewResource,
    Region, RegionRef, Resource, ResourceDocument,
};
use crate::domain::repositories::{ResourceQuery, ResourceRepository};
use crate::error::AppError;
use crate::utils::slug::slugify;

#[derive(Debug, Default)]
struct Store {
    categories: Vec<Category>,
    regions: Vec<Region>,
    documents: Vec<ResourceDocument>,
}

impl Store {
    fn resolve(&self, doc: &ResourceDocument) -> Resource {
        let category = doc
            .category_id
            .as_deref()
            .and_then(|id| self.categories.iter().find(|c| c.id == id))
            .map(|c| CategoryRef {
                id: c.id.clone(),
                title: c.title.clone(),
                slug: c.slug.clone(),
            });
        let region = doc
            .region_id
            .as_deref()
            .and_then(|id| self.regions.iter().find(|r| r.id == id))
            .map(|r| RegionRef {
                id: r.id.clone(),
                title: r.title.clone(),
                pincode: r.pincode.clone(),
            });

        Resource {
            id: doc.id.clone(),
            title: doc.title.clone(),
            slug: document_slug(doc),
            category,
            region,
            description: doc.description.clone(),
            address: doc.address.clone(),
            location: doc.location,
            contact: doc.contact.clone(),
            services: doc.services.clone(),
            eligibility: doc.eligibility.clone(),
            featured_image_url: doc.featured_image_url.clone(),
            approved: doc.approved,
            created_at: doc.created_at,
        }
    }

    fn slug_taken(&self, slug: &str) -> bool {
        self.documents.iter().any(|d| document_slug(d) == slug)
    }

    fn upsert_document(&mut self, doc: ResourceDocument) {
        match self.documents.iter_mut().find(|d| d.id == doc.id) {
            Some(existing) => *existing = doc,
            None => self.documents.push(doc),
        }
    }
}

fn document_slug(doc: &ResourceDocument) -> String {
    doc.slug.clone().unwrap_or_else(|| slugify(&doc.title))
}

fn sort_by_title<T>(items: &mut [T], title: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| title(a).cmp(title(b)));
}

fn upsert_by_id<T>(items: &mut Vec<T>, item: T, id: impl Fn(&T) -> &str) {
    let key = id(&item).to_owned();
    match items.iter_mut().find(|existing| id(existing) == key) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

/// Repository that keeps the whole directory in memory.
///
/// Used for local development (seeded from a JSON file) and for HTTP tests.
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryResourceRepository {
    store: RwLock<Store>,
}

impl MemoryResourceRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the contents of `seed`.
    pub fn from_seed(seed: DirectorySeed) -> Self {
        let mut store = Store::default();
        for category in seed.categories {
            upsert_by_id(&mut store.categories, category, |c| &c.id);
        }
        for region in seed.regions {
            upsert_by_id(&mut store.regions, region, |r| &r.id);
        }
        for doc in seed.resources {
            store.upsert_document(doc);
        }

        Self {
            store: RwLock::new(store),
        }
    }

    /// Loads a JSON seed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid seed.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let seed = read_seed_file(path).await?;
        Ok(Self::from_seed(seed))
    }
}

/// Reads and parses a JSON seed file.
pub async fn read_seed_file(path: impl AsRef<Path>) -> anyhow::Result<DirectorySeed> {
    use anyhow::Context;

    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid seed file {}", path.display()))
}

#[async_trait]
impl ResourceRepository for MemoryResourceRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let mut categories = self.store.read().await.categories.clone();
        sort_by_title(&mut categories, |c| &c.title);
        Ok(categories)
    }

    async fn list_regions(&self) -> Result<Vec<Region>, AppError> {
        let mut regions = self.store.read().await.regions.clone();
        sort_by_title(&mut regions, |r| &r.title);
        Ok(regions)
    }

    async fn find_category(&self, id: &str) -> Result<Option<Category>, AppError> {
        let store = self.store.read().await;
        Ok(store.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_region(&self, id: &str) -> Result<Option<Region>, AppError> {
        let store = self.store.read().await;
        Ok(store.regions.iter().find(|r| r.id == id).cloned())
    }

    async fn list_resources(&self, query: ResourceQuery) -> Result<Vec<Resource>, AppError> {
        let store = self.store.read().await;
        let mut resources: Vec<Resource> = store
            .documents
            .iter()
            .filter(|doc| doc.approved)
            .map(|doc| store.resolve(doc))
            .filter(|r| {
                query
                    .category_slug
                    .as_deref()
                    .is_none_or(|slug| r.category_slug() == Some(slug))
            })
            .filter(|r| {
                query
                    .region_id
                    .as_deref()
                    .is_none_or(|id| r.region_id() == Some(id))
            })
            .collect();
        sort_by_title(&mut resources, |r| &r.title);
        Ok(resources)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Resource>, AppError> {
        let store = self.store.read().await;
        Ok(store
            .documents
            .iter()
            .filter(|doc| doc.approved)
            .find(|doc| document_slug(doc) == slug)
            .map(|doc| store.resolve(doc)))
    }

    async fn create_submission(&self, new_resource: NewResource) -> Result<Resource, AppError> {
        let mut store = self.store.write().await;

        if store.documents.iter().any(|d| d.id == new_resource.id)
            || store.slug_taken(&new_resource.slug)
        {
            return Err(AppError::conflict(
                "A resource with this name already exists",
                json!({ "slug": new_resource.slug }),
            ));
        }

        let contact = ContactInfo {
            phone: new_resource.phone,
            email: new_resource.email,
            ..Default::default()
        };

        let doc = ResourceDocument {
            id: new_resource.id,
            title: new_resource.title,
            slug: Some(new_resource.slug),
            category_id: Some(new_resource.category_id),
            region_id: Some(new_resource.region_id),
            description: Some(new_resource.description),
            address: Some(new_resource.address),
            location: None,
            contact: (!contact.is_empty()).then_some(contact),
            services: Vec::new(),
            eligibility: None,
            featured_image_url: None,
            approved: false,
            created_at: Some(Utc::now()),
        };

        let resource = store.resolve(&doc);
        store.documents.push(doc);
        Ok(resource)
    }

    async fn list_pending(&self) -> Result<Vec<Resource>, AppError> {
        let store = self.store.read().await;
        Ok(store
            .documents
            .iter()
            .filter(|doc| !doc.approved)
            .map(|doc| store.resolve(doc))
            .collect())
    }

    async fn approve(&self, slug: &str) -> Result<bool, AppError> {
        let mut store = self.store.write().await;
        match store
            .documents
            .iter_mut()
            .find(|doc| !doc.approved && document_slug(doc) == slug)
        {
            Some(doc) => {
                doc.approved = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn merge_category(&self, from_id: &str, into_id: &str) -> Result<u64, AppError> {
        let mut store = self.store.write().await;

        for id in [from_id, into_id] {
            if !store.categories.iter().any(|c| c.id == id) {
                return Err(AppError::not_found(
                    "Category not found",
                    json!({ "id": id }),
                ));
            }
        }

        let mut moved = 0;
        for doc in store
            .documents
            .iter_mut()
            .filter(|doc| doc.category_id.as_deref() == Some(from_id))
        {
            doc.category_id = Some(into_id.to_owned());
            moved += 1;
        }
        store.categories.retain(|c| c.id != from_id);

        Ok(moved)
    }

    async fn import_seed(&self, seed: DirectorySeed) -> Result<ImportSummary, AppError> {
        let mut store = self.store.write().await;
        let summary = ImportSummary {
            categories: seed.categories.len(),
            regions: seed.regions.len(),
            resources: seed.resources.len(),
        };

        for category in seed.categories {
            upsert_by_id(&mut store.categories, category, |c| &c.id);
        }
        for region in seed.regions {
            upsert_by_id(&mut store.regions, region, |r| &r.id);
        }
        for doc in seed.resources {
            store.upsert_document(doc);
        }

        Ok(summary)
    }

    async fn stats(&self) -> Result<DirectoryStats, AppError> {
        let store = self.store.read().await;
        let approved = store.documents.iter().filter(|d| d.approved).count() as i64;
        Ok(DirectoryStats {
            categories: store.categories.len() as i64,
            regions: store.regions.len() as i64,
            approved_resources: approved,
            pending_resources: store.documents.len() as i64 - approved,
        })
    }
}
