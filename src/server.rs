//! HTTP server initialization and runtime setup.
//!
//! Selects the resource store, connects the cache and runs the Axum server
//! until Ctrl+C.

use crate::config::Config;
use crate::domain::repositories::ResourceRepository;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{MemoryResourceRepository, PgResourceRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

const CONNECT_ATTEMPTS: usize = 5;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL pool with migrations, or the in-memory store
/// - Redis cache (or NullCache fallback)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migrations fail
/// - The seed file cannot be loaded
/// - Server bind fails
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let cache = build_cache(&config).await;

    let state = AppState::new(
        repository,
        cache,
        config.viewport(),
        config.cache_ttl_seconds,
    );
    let app = app_router(state, true);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_repository(config: &Config) -> Result<Arc<dyn ResourceRepository>> {
    if let Some(database_url) = &config.database_url {
        let pool = connect_pool(config, database_url).await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Migrations applied");

        return Ok(Arc::new(PgResourceRepository::new(Arc::new(pool))));
    }

    let repository = match &config.seed_path {
        Some(path) => {
            let repository = MemoryResourceRepository::from_seed_file(path).await?;
            tracing::info!("Loaded in-memory store from {}", path);
            repository
        }
        None => {
            tracing::warn!("No DATABASE_URL or SEED_PATH; starting with an empty in-memory store");
            MemoryResourceRepository::new()
        }
    };

    Ok(Arc::new(repository))
}

/// Delays between connection attempts: jittered exponential backoff capped
/// at 5 seconds, one fewer than [`CONNECT_ATTEMPTS`].
fn connect_backoff() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(200)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(CONNECT_ATTEMPTS - 1)
}

/// Connects to PostgreSQL, retrying with jittered exponential backoff.
pub async fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let pool = Retry::start(connect_backoff(), || {
        let options = options.clone();
        async move {
            options.connect(database_url).await.inspect_err(|e| {
                tracing::warn!("Database connection attempt failed: {}", e);
            })
        }
    })
    .await
    .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Connects the Redis cache if configured, else falls back to [`NullCache`].
pub async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_backoff_is_bounded() {
        let delays: Vec<Duration> = connect_backoff().collect();

        assert_eq!(delays.len(), CONNECT_ATTEMPTS - 1);
        assert!(delays.iter().all(|d| *d <= Duration::from_secs(5)));
    }
}
