//! Cache service trait and error types.

use async_trait::async_trait;

use crate::domain::entities::Resource;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching resource detail lookups by slug.
///
/// Implementations must be thread-safe and fail open: a broken cache degrades
/// to store lookups, it never fails a request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached resource by slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(resource))` on cache hit
    /// - `Ok(None)` on cache miss or error
    async fn get_resource(&self, slug: &str) -> CacheResult<Option<Resource>>;

    /// Stores a resource under its slug with optional TTL in seconds.
    async fn set_resource(&self, resource: &Resource, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Removes a cached resource.
    ///
    /// Unlike reads and writes this reports backend failures, so callers
    /// that change stored resources can tell that a stale entry may remain.
    async fn invalidate(&self, slug: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short name of the backend for health reports.
    fn backend(&self) -> &'static str;
}
