//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hbnb_db::models::user::{CreateUser, User};
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::handlers::resource;
use crate::state::AppState;

/// POST /api/v1/users
///
/// Requires `email` then `password`. The password is stored as given and
/// never echoed back.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<Value>)> {
    let input: CreateUser = resource::validate_create::<User, _>(body)?;
    resource::insert(state.storage.as_ref(), User::new(input)).await
}
