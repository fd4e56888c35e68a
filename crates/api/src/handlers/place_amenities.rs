//! Handlers for the place/amenity link, `/places/{place_id}/amenities`.
//!
//! The link lives on the place (`amenity_ids`), so linking and unlinking
//! are ordinary place updates as far as storage is concerned.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hbnb_core::error::CoreError;
use hbnb_db::models::amenity::Amenity;
use hbnb_db::models::place::Place;
use hbnb_db::models::Model;
use hbnb_db::storage;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::handlers::resource;
use crate::state::AppState;

/// GET /api/v1/places/{place_id}/amenities
///
/// Ids whose amenity has since been deleted are skipped.
pub async fn list(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> AppResult<Json<Vec<Value>>> {
    let store = state.storage.as_ref();
    let place = resource::find::<Place>(store, &place_id).await?;

    let mut amenities = Vec::with_capacity(place.amenity_ids.len());
    for amenity_id in &place.amenity_ids {
        if let Some(amenity) = storage::get_as::<Amenity>(store, amenity_id).await? {
            amenities.push(amenity);
        }
    }

    Ok(resource::render_all(amenities))
}

/// POST /api/v1/places/{place_id}/amenities/{amenity_id}
///
/// 201 when the link is new, 200 when it already existed.
pub async fn link(
    State(state): State<AppState>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let store = state.storage.as_ref();
    let mut place = resource::find::<Place>(store, &place_id).await?;
    let amenity = resource::find::<Amenity>(store, &amenity_id).await?;

    if !place.link_amenity(amenity.id()) {
        return Ok((StatusCode::OK, Json(resource::render(amenity))));
    }
    storage::persist_as(store, place).await?;

    tracing::info!(place_id = %place_id, amenity_id = %amenity_id, "Amenity linked");

    Ok((StatusCode::CREATED, Json(resource::render(amenity))))
}

/// DELETE /api/v1/places/{place_id}/amenities/{amenity_id}
pub async fn unlink(
    State(state): State<AppState>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    let store = state.storage.as_ref();
    let mut place = resource::find::<Place>(store, &place_id).await?;
    let amenity = resource::find::<Amenity>(store, &amenity_id).await?;

    if !place.unlink_amenity(amenity.id()) {
        return Err(AppError::Core(CoreError::not_found(
            Amenity::KIND.class_name(),
            amenity_id,
        )));
    }
    storage::persist_as(store, place).await?;

    tracing::info!(place_id = %place_id, amenity_id = %amenity_id, "Amenity unlinked");

    Ok(Json(json!({})))
}
