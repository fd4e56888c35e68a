//! Handlers for the `/amenities` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hbnb_db::models::amenity::{Amenity, CreateAmenity};
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::handlers::resource;
use crate::state::AppState;

/// POST /api/v1/amenities
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<Value>)> {
    let input: CreateAmenity = resource::validate_create::<Amenity, _>(body)?;
    resource::insert(state.storage.as_ref(), Amenity::new(input)).await
}
