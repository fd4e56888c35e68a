//! The [`Model`] trait and the type-erased [`Entity`] sum type.

use hbnb_core::kind::EntityKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::base::BaseModel;
use crate::models::{Amenity, City, Place, Review, State, User};

/// Fields dropped from the public representation of an entity.
const PRIVATE_FIELDS: &[&str] = &["password"];

/// Behaviour shared by every concrete entity record.
pub trait Model: Clone + Send + Sync + Serialize + Into<Entity> + 'static {
    const KIND: EntityKind;

    /// Body fields a create request must carry, in check order.
    const REQUIRED: &'static [&'static str];

    /// Optional-field variant of the record accepted by updates.
    ///
    /// Identity, timestamps and immutable references are simply not part of
    /// the patch, so clients cannot overwrite them.
    type Patch: DeserializeOwned + Send;

    fn base(&self) -> &BaseModel;

    /// Merge every field present in `patch`.
    fn apply(&mut self, patch: Self::Patch);

    /// Narrow an [`Entity`] back to this record type.
    fn from_entity(entity: Entity) -> Option<Self>;

    fn id(&self) -> &str {
        &self.base().id
    }
}

/// Any stored entity, tagged with its class name.
///
/// The serde form is the stored representation: `__class__` plus every field,
/// timestamps rendered as ISO-8601.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__class__")]
pub enum Entity {
    Amenity(Amenity),
    City(City),
    Place(Place),
    Review(Review),
    State(State),
    User(User),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Amenity(_) => EntityKind::Amenity,
            Entity::City(_) => EntityKind::City,
            Entity::Place(_) => EntityKind::Place,
            Entity::Review(_) => EntityKind::Review,
            Entity::State(_) => EntityKind::State,
            Entity::User(_) => EntityKind::User,
        }
    }

    pub fn base(&self) -> &BaseModel {
        match self {
            Entity::Amenity(m) => &m.base,
            Entity::City(m) => &m.base,
            Entity::Place(m) => &m.base,
            Entity::Review(m) => &m.base,
            Entity::State(m) => &m.base,
            Entity::User(m) => &m.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut BaseModel {
        match self {
            Entity::Amenity(m) => &mut m.base,
            Entity::City(m) => &mut m.base,
            Entity::Place(m) => &mut m.base,
            Entity::Review(m) => &mut m.base,
            Entity::State(m) => &mut m.base,
            Entity::User(m) => &mut m.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// Key under which this entity is stored (`"<Class>.<id>"`).
    pub fn storage_key(&self) -> String {
        self.kind().storage_key(self.id())
    }

    /// Value of a reference column such as `state_id`, if this entity has it.
    pub fn reference(&self, column: &str) -> Option<&str> {
        match (self, column) {
            (Entity::City(city), "state_id") => Some(&city.state_id),
            (Entity::Place(place), "city_id") => Some(&place.city_id),
            (Entity::Place(place), "user_id") => Some(&place.user_id),
            (Entity::Review(review), "place_id") => Some(&review.place_id),
            (Entity::Review(review), "user_id") => Some(&review.user_id),
            _ => None,
        }
    }

    /// Public JSON representation returned by the API.
    ///
    /// Identical across backends; private fields are removed.
    pub fn to_dict(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut value {
            for field in PRIVATE_FIELDS {
                map.remove(*field);
            }
        }
        value
    }
}
