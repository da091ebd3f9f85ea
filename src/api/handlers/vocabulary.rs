//! Handlers for filter vocabulary endpoints.

use axum::{Json, extract::State};

use crate::api::dto::vocabulary::{CategoryItem, FormOptionsResponse, RegionItem};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/categories` - all categories ordered by title.
pub async fn categories_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryItem>>, AppError> {
    let categories = state.directory.categories().await?;
    Ok(Json(categories.into_iter().map(CategoryItem::from).collect()))
}

/// `GET /api/regions` - all regions ordered by title.
pub async fn regions_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegionItem>>, AppError> {
    let regions = state.directory.regions().await?;
    Ok(Json(regions.into_iter().map(RegionItem::from).collect()))
}

/// `GET /api/form-options` - id/title pairs for the submission form.
pub async fn form_options_handler(
    State(state): State<AppState>,
) -> Result<Json<FormOptionsResponse>, AppError> {
    let options = state.directory.form_options().await?;
    Ok(Json(options.into()))
}
