use axum::routing::get;
use axum::Router;
use hbnb_db::models::Review;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/reviews`. Reviews are created under their place.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list::<Review>))
        .route(
            "/{id}",
            get(resource::get_by_id::<Review>)
                .put(resource::update::<Review>)
                .post(resource::update::<Review>)
                .delete(resource::delete::<Review>),
        )
}
