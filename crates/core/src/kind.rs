//! The six entity types of the domain and the relations between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Discriminates the entity types known to the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Amenity,
    City,
    Place,
    Review,
    State,
    User,
}

impl EntityKind {
    /// Every kind, in `/stats` key order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Amenity,
        EntityKind::City,
        EntityKind::Place,
        EntityKind::Review,
        EntityKind::State,
        EntityKind::User,
    ];

    /// Class name used in storage keys and the `__class__` field.
    pub fn class_name(self) -> &'static str {
        match self {
            EntityKind::Amenity => "Amenity",
            EntityKind::City => "City",
            EntityKind::Place => "Place",
            EntityKind::Review => "Review",
            EntityKind::State => "State",
            EntityKind::User => "User",
        }
    }

    /// Relational table name.
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::Amenity => "amenities",
            EntityKind::City => "cities",
            EntityKind::Place => "places",
            EntityKind::Review => "reviews",
            EntityKind::State => "states",
            EntityKind::User => "users",
        }
    }

    /// Key used for this kind in the `/stats` response.
    pub fn stats_key(self) -> &'static str {
        self.table()
    }

    /// Foreign-key column on `child` that references `self`, if the two
    /// kinds are related.
    ///
    /// ```text
    /// State -> City     state_id
    /// City  -> Place    city_id
    /// User  -> Place    user_id
    /// Place -> Review   place_id
    /// User  -> Review   user_id
    /// ```
    pub fn child_foreign_key(self, child: EntityKind) -> Option<&'static str> {
        match (self, child) {
            (EntityKind::State, EntityKind::City) => Some("state_id"),
            (EntityKind::City, EntityKind::Place) => Some("city_id"),
            (EntityKind::User, EntityKind::Place) => Some("user_id"),
            (EntityKind::Place, EntityKind::Review) => Some("place_id"),
            (EntityKind::User, EntityKind::Review) => Some("user_id"),
            _ => None,
        }
    }

    /// Storage key for an entity of this kind (`"<Class>.<id>"`).
    pub fn storage_key(self, id: &str) -> String {
        format!("{}.{id}", self.class_name())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Error returned when parsing an unknown class name.
#[derive(Debug, thiserror::Error)]
#[error("unknown entity class: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.class_name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
