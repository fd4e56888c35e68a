pub mod amenities;
pub mod cities;
pub mod index;
pub mod places;
pub mod reviews;
pub mod states;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /status                                      service status (GET)
/// /stats                                       per-class counts (GET)
///
/// /states                                      list, create
/// /states/{id}                                 get, update, delete
/// /states/{id}/cities                          list, create
///
/// /cities                                      list
/// /cities/{id}                                 get, update, delete
/// /cities/{id}/places                          list, create
///
/// /amenities                                   list, create
/// /amenities/{id}                              get, update, delete
///
/// /users                                       list, create
/// /users/{id}                                  get, update, delete
///
/// /places                                      list
/// /places/{id}                                 get, update, delete
/// /places/{id}/reviews                         list, create
/// /places/{id}/amenities                       list
/// /places/{id}/amenities/{amenity_id}          link, unlink (POST, DELETE)
///
/// /reviews                                     list
/// /reviews/{id}                                get, update, delete
/// ```
///
/// Updates accept `PUT` and, as an alias, `POST` on the item path.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(index::router())
        .nest("/states", states::router())
        .nest("/cities", cities::router())
        .nest("/amenities", amenities::router())
        .nest("/users", users::router())
        .nest("/places", places::router())
        .nest("/reviews", reviews::router())
}
