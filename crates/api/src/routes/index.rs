use axum::routing::get;
use axum::Router;

use crate::handlers::index;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(index::status))
        .route("/stats", get(index::stats))
}
