//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{DirectoryService, SubmissionService};
use crate::domain::listing::MapViewport;
use crate::domain::repositories::ResourceRepository;
use crate::infrastructure::cache::CacheService;

/// The store implementation is chosen at startup, so services hold it as a
/// trait object.
pub type DynRepository = dyn ResourceRepository;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<DirectoryService<DynRepository>>,
    pub submissions: Arc<SubmissionService<DynRepository>>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        repository: Arc<DynRepository>,
        cache: Arc<dyn CacheService>,
        viewport: MapViewport,
        cache_ttl_seconds: u64,
    ) -> Self {
        let directory = DirectoryService::new(repository.clone(), cache.clone(), viewport)
            .with_cache_ttl(cache_ttl_seconds);

        Self {
            directory: Arc::new(directory),
            submissions: Arc::new(SubmissionService::new(repository)),
            cache,
        }
    }
}
