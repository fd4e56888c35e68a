//! Service-level endpoints: liveness and per-class counts.

use axum::extract::State;
use axum::Json;
use hbnb_core::kind::EntityKind;
use indexmap::IndexMap;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/status
pub async fn status() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

/// GET /api/v1/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<IndexMap<&'static str, usize>>> {
    let mut counts = IndexMap::with_capacity(EntityKind::ALL.len());
    for kind in EntityKind::ALL {
        counts.insert(kind.stats_key(), state.storage.count(Some(kind)).await?);
    }
    Ok(Json(counts))
}
