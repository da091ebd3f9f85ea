//! API route configuration.

use crate::api::handlers::{
    categories_handler, form_options_handler, list_resources_handler, regions_handler,
    resource_detail_handler, submit_resource_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{MethodRouter, get, post},
};

/// All JSON API routes.
///
/// # Endpoints
///
/// - `GET  /categories`        - Categories ordered by title
/// - `GET  /regions`           - Regions ordered by title
/// - `GET  /form-options`      - Id/title pairs for the submission form
/// - `GET  /resources`         - Filtered listing with map markers
/// - `GET  /resources/{slug}`  - Single approved resource
/// - `POST /resources`         - Public submission (stricter limit)
///
/// With `rate_limited` set, reads share one per-IP bucket and submissions
/// use their own.
pub fn routes(rate_limited: bool) -> Router<AppState> {
    let public_limit = rate_limited.then(rate_limit::public_layer);
    let submission_limit = rate_limited.then(rate_limit::submission_layer);

    let read = |route: MethodRouter<AppState>| match &public_limit {
        Some(layer) => route.layer(layer.clone()),
        None => route,
    };
    let submit = match submission_limit {
        Some(layer) => post(submit_resource_handler).layer(layer),
        None => post(submit_resource_handler),
    };

    Router::new()
        .route("/categories", read(get(categories_handler)))
        .route("/regions", read(get(regions_handler)))
        .route("/form-options", read(get(form_options_handler)))
        .route(
            "/resources",
            read(get(list_resources_handler)).merge(submit),
        )
        .route("/resources/{slug}", read(get(resource_detail_handler)))
}
