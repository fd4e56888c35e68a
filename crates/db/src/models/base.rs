//! Fields shared by every entity.

use hbnb_core::types::{self, timestamp_format, EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Identity and audit timestamps common to all entities.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct BaseModel {
    pub id: EntityId,
    #[serde(with = "timestamp_format")]
    pub created_at: Timestamp,
    #[serde(with = "timestamp_format")]
    pub updated_at: Timestamp,
}

impl BaseModel {
    /// Fresh identity with `created_at == updated_at`.
    pub fn new() -> Self {
        let now = types::now();
        Self {
            id: types::new_id(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for BaseModel {
    fn default() -> Self {
        Self::new()
    }
}
