//! Handlers for cities nested under `/states/{state_id}/cities`.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hbnb_db::models::city::{City, CreateCity};
use hbnb_db::models::state::State as StateModel;
use hbnb_db::models::Model;
use hbnb_db::storage;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::handlers::resource;
use crate::state::AppState;

/// GET /api/v1/states/{state_id}/cities
pub async fn list_by_state(
    State(state): State<AppState>,
    Path(state_id): Path<String>,
) -> AppResult<Json<Vec<Value>>> {
    let store = state.storage.as_ref();
    let parent = resource::find::<StateModel>(store, &state_id).await?;

    let cities = storage::children_as::<City>(store, StateModel::KIND, parent.id()).await?;
    Ok(resource::render_all(cities))
}

/// POST /api/v1/states/{state_id}/cities
///
/// The parent state is resolved before the body is looked at, so a missing
/// state answers 404 even for a malformed body.
pub async fn create(
    State(state): State<AppState>,
    Path(state_id): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Value>)> {
    let store = state.storage.as_ref();
    let parent = resource::find::<StateModel>(store, &state_id).await?;

    let JsonBody(body) = JsonBody::parse(&body)?;
    let input: CreateCity = resource::validate_create::<City, _>(body)?;

    resource::insert(store, City::new(parent.base.id, input)).await
}
