//! Route definitions for places, their reviews and their amenities.

use axum::routing::{get, post};
use axum::Router;
use hbnb_db::models::Place;

use crate::handlers::{place_amenities, resource, reviews};
use crate::state::AppState;

/// Routes mounted at `/places`. Places are created under their city.
///
/// ```text
/// GET    /                              -> list
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// POST   /{id}                          -> update
/// DELETE /{id}                          -> delete
/// GET    /{id}/reviews                  -> reviews::list_by_place
/// POST   /{id}/reviews                  -> reviews::create
/// GET    /{id}/amenities                -> place_amenities::list
/// POST   /{id}/amenities/{amenity_id}   -> place_amenities::link
/// DELETE /{id}/amenities/{amenity_id}   -> place_amenities::unlink
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list::<Place>))
        .route(
            "/{id}",
            get(resource::get_by_id::<Place>)
                .put(resource::update::<Place>)
                .post(resource::update::<Place>)
                .delete(resource::delete::<Place>),
        )
        .route(
            "/{id}/reviews",
            get(reviews::list_by_place).post(reviews::create),
        )
        .route("/{id}/amenities", get(place_amenities::list))
        .route(
            "/{id}/amenities/{amenity_id}",
            post(place_amenities::link).delete(place_amenities::unlink),
        )
}
