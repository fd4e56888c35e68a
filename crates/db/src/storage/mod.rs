//! The storage engine: one contract, two interchangeable backends.
//!
//! Handlers only ever see `Arc<dyn Storage>`, so switching between the JSON
//! file store and the PostgreSQL store is a configuration choice.

mod file;
mod relational;

use std::path::PathBuf;

use async_trait::async_trait;
use hbnb_core::kind::EntityKind;
use indexmap::IndexMap;

use crate::models::{Entity, Model};

pub use file::FileStorage;
pub use relational::DbStorage;

/// Failures surfaced by a storage backend.
///
/// Absence is never an error: lookups return `None` instead.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{parent} has no {child} children")]
    InvalidRelation {
        parent: EntityKind,
        child: EntityKind,
    },

    #[error("Expected a {expected} but storage returned a {found}")]
    KindMismatch {
        expected: EntityKind,
        found: EntityKind,
    },
}

/// Uniform persistence contract implemented by every backend.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Every stored entity, optionally restricted to one kind, keyed by
    /// `"<Class>.<id>"`.
    async fn all(&self, kind: Option<EntityKind>) -> Result<IndexMap<String, Entity>, StorageError>;

    /// Point lookup by kind and id.
    async fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Entity>, StorageError>;

    /// Insert a new entity or update an existing one, returning the stored
    /// value.
    ///
    /// Updates keep the stored `created_at` and move `updated_at` strictly
    /// forward. Inserts keep the timestamps the entity was built with.
    async fn persist(&self, entity: Entity) -> Result<Entity, StorageError>;

    /// Remove an entity. Deleting something that is not stored is a no-op.
    async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), StorageError>;

    /// Number of stored entities, optionally restricted to one kind.
    async fn count(&self, kind: Option<EntityKind>) -> Result<usize, StorageError>;

    /// Entities of kind `child` whose reference column points at the given
    /// parent.
    async fn list_children(
        &self,
        parent: EntityKind,
        parent_id: &str,
        child: EntityKind,
    ) -> Result<Vec<Entity>, StorageError>;

    /// Release per-request resources. Safe to call any number of times.
    async fn close(&self) -> Result<(), StorageError>;
}

/// Resolve the reference column joining `parent` to `child`.
pub(crate) fn relation_column(
    parent: EntityKind,
    child: EntityKind,
) -> Result<&'static str, StorageError> {
    parent
        .child_foreign_key(child)
        .ok_or(StorageError::InvalidRelation { parent, child })
}

fn narrow<M: Model>(entity: Entity) -> Result<M, StorageError> {
    let found = entity.kind();
    M::from_entity(entity).ok_or(StorageError::KindMismatch {
        expected: M::KIND,
        found,
    })
}

/// Typed [`Storage::get`].
pub async fn get_as<M: Model>(storage: &dyn Storage, id: &str) -> Result<Option<M>, StorageError> {
    storage.get(M::KIND, id).await?.map(narrow).transpose()
}

/// Typed [`Storage::all`], in storage order.
pub async fn all_as<M: Model>(storage: &dyn Storage) -> Result<Vec<M>, StorageError> {
    storage
        .all(Some(M::KIND))
        .await?
        .into_values()
        .map(narrow)
        .collect()
}

/// Typed [`Storage::list_children`].
pub async fn children_as<M: Model>(
    storage: &dyn Storage,
    parent: EntityKind,
    parent_id: &str,
) -> Result<Vec<M>, StorageError> {
    storage
        .list_children(parent, parent_id, M::KIND)
        .await?
        .into_iter()
        .map(narrow)
        .collect()
}

/// Typed [`Storage::persist`].
pub async fn persist_as<M: Model>(storage: &dyn Storage, model: M) -> Result<M, StorageError> {
    narrow(storage.persist(model.into()).await?)
}
