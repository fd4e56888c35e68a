//! User entity model and DTOs.

use hbnb_core::kind::EntityKind;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::base::BaseModel;
use crate::models::entity::{Entity, Model};

/// A row from the `users` table.
///
/// `email` is unique by convention only; nothing enforces it.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// DTO for updating a user. `email` cannot be changed once set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    pub fn new(input: CreateUser) -> Self {
        Self {
            base: BaseModel::new(),
            email: input.email,
            password: input.password,
            first_name: input.first_name,
            last_name: input.last_name,
        }
    }
}

impl Model for User {
    const KIND: EntityKind = EntityKind::User;
    const REQUIRED: &'static [&'static str] = &["email", "password"];
    type Patch = UpdateUser;

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn apply(&mut self, patch: UpdateUser) {
        if let Some(password) = patch.password {
            self.password = password;
        }
        if patch.first_name.is_some() {
            self.first_name = patch.first_name;
        }
        if patch.last_name.is_some() {
            self.last_name = patch.last_name;
        }
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::User(user) => Some(user),
            _ => None,
        }
    }
}

impl From<User> for Entity {
    fn from(value: User) -> Self {
        Entity::User(value)
    }
}
