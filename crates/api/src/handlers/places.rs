//! Handlers for places nested under `/cities/{city_id}/places`.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hbnb_db::models::city::City;
use hbnb_db::models::place::{CreatePlace, Place};
use hbnb_db::models::user::User;
use hbnb_db::models::Model;
use hbnb_db::storage;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::handlers::resource;
use crate::state::AppState;

/// GET /api/v1/cities/{city_id}/places
pub async fn list_by_city(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> AppResult<Json<Vec<Value>>> {
    let store = state.storage.as_ref();
    let city = resource::find::<City>(store, &city_id).await?;

    let places = storage::children_as::<Place>(store, City::KIND, city.id()).await?;
    Ok(resource::render_all(places))
}

/// POST /api/v1/cities/{city_id}/places
///
/// Check order: city exists, body is a JSON object, `user_id` and `name` are
/// present, then the referenced user exists.
pub async fn create(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Value>)> {
    let store = state.storage.as_ref();
    let city = resource::find::<City>(store, &city_id).await?;

    let JsonBody(body) = JsonBody::parse(&body)?;
    let input: CreatePlace = resource::validate_create::<Place, _>(body)?;
    resource::find::<User>(store, &input.user_id).await?;

    resource::insert(store, Place::new(city.base.id, input)).await
}
