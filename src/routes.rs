//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: store and cache
//! - `/api/*`            - JSON API
//! - `/`, `/resources*`  - Server-rendered pages
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limited` - enables per-IP limits; these key on the peer address,
///   so the router must then be served with connect info
pub fn app_router(state: AppState, rate_limited: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, rate_limited))
}

/// All routes with tracing but without path normalization.
pub fn router(state: AppState, rate_limited: bool) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes(rate_limited))
        .merge(web::routes::routes(rate_limited))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}
