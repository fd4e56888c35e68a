//! City entity model and DTOs.

use hbnb_core::kind::EntityKind;
use hbnb_core::types::EntityId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::base::BaseModel;
use crate::models::entity::{Entity, Model};

/// A row from the `cities` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct City {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub state_id: EntityId,
    pub name: String,
}

/// DTO for creating a city. `state_id` comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCity {
    pub name: String,
}

/// DTO for updating a city. `state_id` is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCity {
    pub name: Option<String>,
}

impl City {
    pub fn new(state_id: EntityId, input: CreateCity) -> Self {
        Self {
            base: BaseModel::new(),
            state_id,
            name: input.name,
        }
    }
}

impl Model for City {
    const KIND: EntityKind = EntityKind::City;
    const REQUIRED: &'static [&'static str] = &["name"];
    type Patch = UpdateCity;

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn apply(&mut self, patch: UpdateCity) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::City(city) => Some(city),
            _ => None,
        }
    }
}

impl From<City> for Entity {
    fn from(value: City) -> Self {
        Entity::City(value)
    }
}
