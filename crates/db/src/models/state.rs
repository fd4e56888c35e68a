//! State entity model and DTOs.

use hbnb_core::kind::EntityKind;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::base::BaseModel;
use crate::models::entity::{Entity, Model};

/// A row from the `states` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct State {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub name: String,
}

/// DTO for creating a new state.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateState {
    pub name: String,
}

/// DTO for updating an existing state. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateState {
    pub name: Option<String>,
}

impl State {
    pub fn new(input: CreateState) -> Self {
        Self {
            base: BaseModel::new(),
            name: input.name,
        }
    }
}

impl Model for State {
    const KIND: EntityKind = EntityKind::State;
    const REQUIRED: &'static [&'static str] = &["name"];
    type Patch = UpdateState;

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn apply(&mut self, patch: UpdateState) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::State(state) => Some(state),
            _ => None,
        }
    }
}

impl From<State> for Entity {
    fn from(value: State) -> Self {
        Entity::State(value)
    }
}
