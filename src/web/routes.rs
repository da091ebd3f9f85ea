//! Web page route configuration.

use crate::api::middleware::rate_limit;
use crate::state::AppState;
use crate::web::handlers::{resource_page_handler, resources_page_handler};
use axum::{Router, response::Redirect, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /`                  - Redirects to `/resources`
/// - `GET /resources`         - Listing page with list and map panes
/// - `GET /resources/{slug}`  - Resource detail page
pub fn routes(rate_limited: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/", get(|| async { Redirect::to("/resources") }))
        .route("/resources", get(resources_page_handler))
        .route("/resources/{slug}", get(resource_page_handler));

    if rate_limited {
        router.layer(rate_limit::public_layer())
    } else {
        router
    }
}
