//! Generic CRUD handlers shared by every entity type.
//!
//! Each handler is parameterised by the [`Model`] it serves and is mounted
//! with a turbofish, e.g. `get(resource::list::<State>)`.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hbnb_core::error::CoreError;
use hbnb_core::validation::{self, JsonObject};
use hbnb_db::models::{Entity, Model};
use hbnb_db::storage::{self, Storage};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// Public JSON form of a model.
pub fn render<M: Model>(model: M) -> Value {
    let entity: Entity = model.into();
    entity.to_dict()
}

/// Public JSON form of a list of models, in storage order.
pub fn render_all<M: Model>(models: Vec<M>) -> Json<Vec<Value>> {
    Json(models.into_iter().map(render).collect())
}

/// Fetch a model by id or fail with 404.
pub async fn find<M: Model>(store: &dyn Storage, id: &str) -> AppResult<M> {
    storage::get_as::<M>(store, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(M::KIND.class_name(), id)))
}

/// Check the fields `M` requires on create, then deserialize the body into
/// its create DTO.
pub fn validate_create<M: Model, C: DeserializeOwned>(body: JsonObject) -> AppResult<C> {
    validation::require_fields(&body, M::REQUIRED)?;
    Ok(validation::into_typed(body)?)
}

/// Persist a freshly built model and answer `201 Created`.
pub async fn insert<M: Model>(
    store: &dyn Storage,
    model: M,
) -> AppResult<(StatusCode, Json<Value>)> {
    let model = storage::persist_as(store, model).await?;

    tracing::info!(kind = %M::KIND, id = %model.id(), "Entity created");

    Ok((StatusCode::CREATED, Json(render(model))))
}

/// GET /api/v1/<plural>
pub async fn list<M: Model>(State(state): State<AppState>) -> AppResult<Json<Vec<Value>>> {
    let models = storage::all_as::<M>(state.storage.as_ref()).await?;
    Ok(render_all(models))
}

/// GET /api/v1/<plural>/{id}
pub async fn get_by_id<M: Model>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let model = find::<M>(state.storage.as_ref(), &id).await?;
    Ok(Json(render(model)))
}

/// PUT /api/v1/<plural>/{id}
///
/// Merges the typed patch of `M`; identity, timestamps and immutable
/// references are not part of any patch and are silently ignored.
pub async fn update<M: Model>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<Value>> {
    let store = state.storage.as_ref();
    let mut model = find::<M>(store, &id).await?;

    let JsonBody(body) = JsonBody::parse(&body)?;
    let patch: M::Patch = validation::into_typed(body)?;
    model.apply(patch);

    let model = storage::persist_as(store, model).await?;

    tracing::info!(kind = %M::KIND, id = %model.id(), "Entity updated");

    Ok(Json(render(model)))
}

/// DELETE /api/v1/<plural>/{id}
pub async fn delete<M: Model>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let store = state.storage.as_ref();
    let model = find::<M>(store, &id).await?;

    store.delete(M::KIND, model.id()).await?;

    tracing::info!(kind = %M::KIND, id = %model.id(), "Entity deleted");

    Ok(Json(json!({})))
}
