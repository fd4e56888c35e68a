//! Review entity model and DTOs.

use hbnb_core::kind::EntityKind;
use hbnb_core::types::EntityId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::base::BaseModel;
use crate::models::entity::{Entity, Model};

/// A row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Review {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub place_id: EntityId,
    pub user_id: EntityId,
    pub text: String,
}

/// DTO for creating a review. `place_id` comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub user_id: EntityId,
    pub text: String,
}

/// DTO for updating a review. Only the text is mutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReview {
    pub text: Option<String>,
}

impl Review {
    pub fn new(place_id: EntityId, input: CreateReview) -> Self {
        Self {
            base: BaseModel::new(),
            place_id,
            user_id: input.user_id,
            text: input.text,
        }
    }
}

impl Model for Review {
    const KIND: EntityKind = EntityKind::Review;
    const REQUIRED: &'static [&'static str] = &["user_id", "text"];
    type Patch = UpdateReview;

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn apply(&mut self, patch: UpdateReview) {
        if let Some(text) = patch.text {
            self.text = text;
        }
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::Review(review) => Some(review),
            _ => None,
        }
    }
}

impl From<Review> for Entity {
    fn from(value: Review) -> Self {
        Entity::Review(value)
    }
}
