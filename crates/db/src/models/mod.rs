pub mod amenity;
pub mod base;
pub mod city;
pub mod entity;
pub mod place;
pub mod review;
pub mod state;
pub mod user;

pub use amenity::Amenity;
pub use base::BaseModel;
pub use city::City;
pub use entity::{Entity, Model};
pub use place::Place;
pub use review::Review;
pub use state::State;
pub use user::User;
