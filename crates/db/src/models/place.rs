//! Place entity model and DTOs.

use hbnb_core::kind::EntityKind;
use hbnb_core::types::EntityId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::base::BaseModel;
use crate::models::entity::{Entity, Model};

/// A row from the `places` table.
///
/// `amenity_ids` is not a column: the relational backend aggregates it from
/// `place_amenity`, the file backend stores it inline.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Place {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub city_id: EntityId,
    pub user_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub number_rooms: i32,
    #[serde(default)]
    pub number_bathrooms: i32,
    #[serde(default)]
    pub max_guest: i32,
    #[serde(default)]
    pub price_by_night: i32,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub amenity_ids: Vec<EntityId>,
}

/// DTO for creating a place. `city_id` comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlace {
    pub user_id: EntityId,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub number_rooms: i32,
    #[serde(default)]
    pub number_bathrooms: i32,
    #[serde(default)]
    pub max_guest: i32,
    #[serde(default)]
    pub price_by_night: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// DTO for updating a place. Owner and city are immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlace {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<i32>,
    pub number_bathrooms: Option<i32>,
    pub max_guest: Option<i32>,
    pub price_by_night: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Place {
    pub fn new(city_id: EntityId, input: CreatePlace) -> Self {
        Self {
            base: BaseModel::new(),
            city_id,
            user_id: input.user_id,
            name: input.name,
            description: input.description,
            number_rooms: input.number_rooms,
            number_bathrooms: input.number_bathrooms,
            max_guest: input.max_guest,
            price_by_night: input.price_by_night,
            latitude: input.latitude,
            longitude: input.longitude,
            amenity_ids: Vec::new(),
        }
    }

    /// Link an amenity. Returns `false` if it was already linked.
    pub fn link_amenity(&mut self, amenity_id: &str) -> bool {
        if self.has_amenity(amenity_id) {
            return false;
        }
        self.amenity_ids.push(amenity_id.to_string());
        true
    }

    /// Unlink an amenity. Returns `false` if it was not linked.
    pub fn unlink_amenity(&mut self, amenity_id: &str) -> bool {
        let before = self.amenity_ids.len();
        self.amenity_ids.retain(|id| id != amenity_id);
        self.amenity_ids.len() != before
    }

    pub fn has_amenity(&self, amenity_id: &str) -> bool {
        self.amenity_ids.iter().any(|id| id == amenity_id)
    }
}

impl Model for Place {
    const KIND: EntityKind = EntityKind::Place;
    const REQUIRED: &'static [&'static str] = &["user_id", "name"];
    type Patch = UpdatePlace;

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn apply(&mut self, patch: UpdatePlace) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
        if let Some(number_rooms) = patch.number_rooms {
            self.number_rooms = number_rooms;
        }
        if let Some(number_bathrooms) = patch.number_bathrooms {
            self.number_bathrooms = number_bathrooms;
        }
        if let Some(max_guest) = patch.max_guest {
            self.max_guest = max_guest;
        }
        if let Some(price_by_night) = patch.price_by_night {
            self.price_by_night = price_by_night;
        }
        if patch.latitude.is_some() {
            self.latitude = patch.latitude;
        }
        if patch.longitude.is_some() {
            self.longitude = patch.longitude;
        }
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::Place(place) => Some(place),
            _ => None,
        }
    }
}

impl From<Place> for Entity {
    fn from(value: Place) -> Self {
        Entity::Place(value)
    }
}
