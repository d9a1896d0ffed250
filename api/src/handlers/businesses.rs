//! Business handlers
//!
//! CRUD endpoints for the business resource.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::domain::entities::{Business, BusinessId};
use crate::error::{AppError, BUSINESS_NOT_FOUND};
use crate::AppState;

/// Bodies are parsed by hand so malformed JSON gets the API's own error body
/// rather than axum's plain-text rejection.
fn parse_body(body: &Bytes) -> Result<Value, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        AppError::BadRequest("Invalid JSON".to_string())
    })
}

/// A path segment that is not an integer cannot name a business
fn parse_id(raw: &str) -> Result<BusinessId, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(BUSINESS_NOT_FOUND.to_string()))
}

/// GET /
///
/// List every business in ascending id order.
pub async fn list_businesses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Business>>, AppError> {
    let businesses = state.business_service.list().await?;
    tracing::debug!(count = businesses.len(), "Listed businesses");
    Ok(Json(businesses))
}

/// POST /
///
/// Create a business. The id is assigned by the server.
pub async fn create_business(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Business>), AppError> {
    let body = parse_body(&body)?;
    let business = state.business_service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(business)))
}

/// GET /:id/
pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Business>, AppError> {
    let business = state.business_service.get(parse_id(&id)?).await?;
    Ok(Json(business))
}

/// PUT /:id/
///
/// Replace every field of a business except its id.
pub async fn update_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Business>, AppError> {
    let body = parse_body(&body)?;
    // body errors take precedence over an unparseable id
    let business = state
        .business_service
        .update(id.parse().ok(), &body)
        .await?;
    Ok(Json(business))
}

/// DELETE /:id/
pub async fn delete_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.business_service.delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
