//! JSON file backend.
//!
//! Keeps the whole object graph in memory and rewrites the entire file on
//! every mutation. The file is a single JSON object mapping
//! `"<Class>.<id>"` to the entity's stored form.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hbnb_core::kind::EntityKind;
use hbnb_core::types;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{relation_column, Storage, StorageError};
use crate::models::Entity;

type ObjectMap = IndexMap<String, Entity>;

/// File-serialization storage backend.
pub struct FileStorage {
    path: PathBuf,
    objects: RwLock<ObjectMap>,
}

impl FileStorage {
    /// Open the store at `path`, loading it if the file exists.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let storage = Self {
            path: path.into(),
            objects: RwLock::new(IndexMap::new()),
        };
        storage.reload().await?;
        Ok(storage)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory map with the file contents.
    ///
    /// A missing file leaves the current contents untouched.
    pub async fn reload(&self) -> Result<(), StorageError> {
        let mut objects = self.objects.write().await;

        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        *objects = serde_json::from_slice(&raw)?;
        tracing::debug!(path = %self.path.display(), count = objects.len(), "File storage reloaded");
        Ok(())
    }

    /// Write the whole map to disk via a sibling temp file and a rename.
    async fn flush(&self, objects: &ObjectMap) -> Result<(), StorageError> {
        let raw = serde_json::to_vec(objects)?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|source| StorageError::Io {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), count = objects.len(), "File storage flushed");
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn all(&self, kind: Option<EntityKind>) -> Result<ObjectMap, StorageError> {
        let objects = self.objects.read().await;
        Ok(objects
            .iter()
            .filter(|(_, entity)| kind.map_or(true, |k| entity.kind() == k))
            .map(|(key, entity)| (key.clone(), entity.clone()))
            .collect())
    }

    async fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Entity>, StorageError> {
        let objects = self.objects.read().await;
        Ok(objects.get(&kind.storage_key(id)).cloned())
    }

    async fn persist(&self, mut entity: Entity) -> Result<Entity, StorageError> {
        let mut objects = self.objects.write().await;
        let key = entity.storage_key();

        if let Some(existing) = objects.get(&key) {
            let stored = existing.base();
            let previous = stored.updated_at.max(entity.base().updated_at);
            let created_at = stored.created_at;

            let base = entity.base_mut();
            base.created_at = created_at;
            base.updated_at = types::touched_after(previous);
        }

        let previous = objects.insert(key.clone(), entity.clone());
        if let Err(e) = self.flush(&objects).await {
            match previous {
                Some(old) => objects.insert(key, old),
                None => objects.shift_remove(&key),
            };
            return Err(e);
        }

        Ok(entity)
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), StorageError> {
        let mut objects = self.objects.write().await;
        let key = kind.storage_key(id);

        let Some(removed) = objects.shift_remove(&key) else {
            return Ok(());
        };
        if let Err(e) = self.flush(&objects).await {
            objects.insert(key, removed);
            return Err(e);
        }
        Ok(())
    }

    async fn count(&self, kind: Option<EntityKind>) -> Result<usize, StorageError> {
        let objects = self.objects.read().await;
        Ok(match kind {
            Some(kind) => objects.values().filter(|e| e.kind() == kind).count(),
            None => objects.len(),
        })
    }

    async fn list_children(
        &self,
        parent: EntityKind,
        parent_id: &str,
        child: EntityKind,
    ) -> Result<Vec<Entity>, StorageError> {
        let column = relation_column(parent, child)?;
        let objects = self.objects.read().await;
        Ok(objects
            .values()
            .filter(|e| e.kind() == child && e.reference(column) == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn close(&self) -> Result<(), StorageError> {
        self.reload().await
    }
}
