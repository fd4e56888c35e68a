use axum::routing::get;
use axum::Router;
use hbnb_db::models::Amenity;

use crate::handlers::{amenities, resource};
use crate::state::AppState;

/// Routes mounted at `/amenities`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// POST   /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list::<Amenity>).post(amenities::create))
        .route(
            "/{id}",
            get(resource::get_by_id::<Amenity>)
                .put(resource::update::<Amenity>)
                .post(resource::update::<Amenity>)
                .delete(resource::delete::<Amenity>),
        )
}
