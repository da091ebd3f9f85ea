//! Handlers for resource listing and detail endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::listing::{ListingQuery, ListingResponse, ResourceItem};
use crate::error::AppError;
use crate::state::AppState;

/// Lists approved resources matching the query.
///
/// # Endpoint
///
/// `GET /api/resources?search=&category=&region=`
///
/// # Query Parameters
///
/// - `search` (optional): Case-insensitive substring over title, address,
///   region title and category title
/// - `category` (optional): Exact category slug
/// - `region` (optional): Exact region id
///
/// # Response
///
/// ```json
/// {
///   "result_label": "2 results",
///   "total": 2,
///   "has_filters": true,
///   "viewport": { "center_lat": 23.0225, "center_lng": 72.5714, "zoom": 12 },
///   "items": [ ... ],
///   "markers": [{ "id": "resource-mj-library", "title": "M.J. Library", "latitude": 23.02, "longitude": 72.57 }]
/// }
/// ```
pub async fn list_resources_handler(
    State(state): State<AppState>,
    Query(params): Query<ListingQuery>,
) -> Result<Json<ListingResponse>, AppError> {
    let listing = state.directory.listing(&params.criteria()).await?;
    Ok(Json(listing.into()))
}

/// Returns a single approved resource.
///
/// # Endpoint
///
/// `GET /api/resources/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if no approved resource has this slug.
pub async fn resource_detail_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ResourceItem>, AppError> {
    let resource = state.directory.resource_by_slug(&slug).await?;
    Ok(Json(resource.into()))
}
