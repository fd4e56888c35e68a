//! Handlers for reviews nested under `/places/{place_id}/reviews`.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hbnb_db::models::place::Place;
use hbnb_db::models::review::{CreateReview, Review};
use hbnb_db::models::user::User;
use hbnb_db::models::Model;
use hbnb_db::storage;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::handlers::resource;
use crate::state::AppState;

/// GET /api/v1/places/{place_id}/reviews
pub async fn list_by_place(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> AppResult<Json<Vec<Value>>> {
    let store = state.storage.as_ref();
    let place = resource::find::<Place>(store, &place_id).await?;

    let reviews = storage::children_as::<Review>(store, Place::KIND, place.id()).await?;
    Ok(resource::render_all(reviews))
}

/// POST /api/v1/places/{place_id}/reviews
pub async fn create(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Value>)> {
    let store = state.storage.as_ref();
    let place = resource::find::<Place>(store, &place_id).await?;

    let JsonBody(body) = JsonBody::parse(&body)?;
    let input: CreateReview = resource::validate_create::<Review, _>(body)?;
    resource::find::<User>(store, &input.user_id).await?;

    resource::insert(store, Review::new(place.base.id, input)).await
}
