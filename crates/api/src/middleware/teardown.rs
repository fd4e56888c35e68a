//! Per-request storage teardown.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Run the request, then release storage resources whatever the outcome.
///
/// A failed teardown is logged and does not alter the response that was
/// already produced.
pub async fn close_storage(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    if let Err(e) = state.storage.close().await {
        tracing::warn!(error = %e, "Storage teardown failed");
    }

    response
}
