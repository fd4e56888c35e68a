//! Amenity entity model and DTOs.

use hbnb_core::kind::EntityKind;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::base::BaseModel;
use crate::models::entity::{Entity, Model};

/// A row from the `amenities` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAmenity {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAmenity {
    pub name: Option<String>,
}

impl Amenity {
    pub fn new(input: CreateAmenity) -> Self {
        Self {
            base: BaseModel::new(),
            name: input.name,
        }
    }
}

impl Model for Amenity {
    const KIND: EntityKind = EntityKind::Amenity;
    const REQUIRED: &'static [&'static str] = &["name"];
    type Patch = UpdateAmenity;

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn apply(&mut self, patch: UpdateAmenity) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::Amenity(amenity) => Some(amenity),
            _ => None,
        }
    }
}

impl From<Amenity> for Entity {
    fn from(value: Amenity) -> Self {
        Entity::Amenity(value)
    }
}
