//! Route definitions for states and their cities.

use axum::routing::get;
use axum::Router;
use hbnb_db::models::State;

use crate::handlers::{cities, resource, states};
use crate::state::AppState;

/// Routes mounted at `/states`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// POST   /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/cities    -> cities::list_by_state
/// POST   /{id}/cities    -> cities::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list::<State>).post(states::create))
        .route(
            "/{id}",
            get(resource::get_by_id::<State>)
                .put(resource::update::<State>)
                .post(resource::update::<State>)
                .delete(resource::delete::<State>),
        )
        .route(
            "/{id}/cities",
            get(cities::list_by_state).post(cities::create),
        )
}
