pub mod amenities;
pub mod cities;
pub mod index;
pub mod place_amenities;
pub mod places;
pub mod resource;
pub mod reviews;
pub mod states;
pub mod users;
