use axum::routing::get;
use axum::Router;
use hbnb_db::models::User;

use crate::handlers::{resource, users};
use crate::state::AppState;

/// Routes mounted at `/users`.
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
        .route("/", get(resource::list::<User>).post(users::create))
        .route(
            "/{id}",
            get(resource::get_by_id::<User>)
                .put(resource::update::<User>)
                .post(resource::update::<User>)
                .delete(resource::delete::<User>),
        )
}
