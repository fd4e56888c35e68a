//! Route definitions for cities and their places.

use axum::routing::get;
use axum::Router;
use hbnb_db::models::City;

use crate::handlers::{places, resource};
use crate::state::AppState;

/// Routes mounted at `/cities`. Cities are created under their state.
///
/// ```text
/// GET    /               -> list
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// POST   /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/places    -> places::list_by_city
/// POST   /{id}/places    -> places::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list::<City>))
        .route(
            "/{id}",
            get(resource::get_by_id::<City>)
                .put(resource::update::<City>)
                .post(resource::update::<City>)
                .delete(resource::delete::<City>),
        )
        .route(
            "/{id}/places",
            get(places::list_by_city).post(places::create),
        )
}
