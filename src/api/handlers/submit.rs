//! Handler for public resource submissions.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::submission::{SubmitResourceRequest, SubmitResourceResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a resource submission for review.
///
/// # Endpoint
///
/// `POST /api/resources`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Sewa Free Clinic",
///   "categoryId": "category-free-clinic",
///   "regionId": "region-maninagar",
///   "address": "Near Maninagar station",
///   "description": "Free OPD on weekdays",
///   "phone": "+91 79 0000 0000",   // optional
///   "email": "clinic@example.org"  // optional
/// }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// { "message": "Resource submitted for review", "id": "resource-sewa-free-clinic" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: missing fields, invalid email, unknown category or region
/// - **409 Conflict**: a resource with the same slug already exists
pub async fn submit_resource_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitResourceRequest>,
) -> Result<(StatusCode, Json<SubmitResourceResponse>), AppError> {
    payload.validate()?;

    let resource = state.submissions.submit(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResourceResponse {
            message: "Resource submitted for review",
            id: resource.id,
        }),
    ))
}
