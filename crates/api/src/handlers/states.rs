//! Handlers for the `/states` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hbnb_db::models::state::{CreateState, State as StateModel};
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::handlers::resource;
use crate::state::AppState;

/// POST /api/v1/states
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<Value>)> {
    let input: CreateState = resource::validate_create::<StateModel, _>(body)?;
    resource::insert(state.storage.as_ref(), StateModel::new(input)).await
}
