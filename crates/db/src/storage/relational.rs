//! PostgreSQL backend.
//!
//! One table per entity kind; the Place <-> Amenity link lives in
//! `place_amenity`. Relationship traversal is a foreign-key query, never an
//! eager graph load.

use async_trait::async_trait;
use hbnb_core::kind::EntityKind;
use hbnb_core::types::{self, Timestamp};
use indexmap::IndexMap;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, Transaction};

use super::{relation_column, Storage, StorageError};
use crate::models::{Amenity, BaseModel, City, Entity, Place, Review, State, User};
use crate::DbPool;

/// Column list for `states` queries.
const STATE_COLUMNS: &str = "id, created_at, updated_at, name";

/// Column list for `cities` queries.
const CITY_COLUMNS: &str = "id, created_at, updated_at, state_id, name";

/// Column list for `amenities` queries.
const AMENITY_COLUMNS: &str = "id, created_at, updated_at, name";

/// Column list for `users` queries.
const USER_COLUMNS: &str = "id, created_at, updated_at, email, password, first_name, last_name";

/// Column list for `places` queries, with linked amenities aggregated in
/// link order.
const PLACE_COLUMNS: &str = "\
    id, created_at, updated_at, city_id, user_id, name, description, \
    number_rooms, number_bathrooms, max_guest, price_by_night, latitude, longitude, \
    ARRAY(SELECT pa.amenity_id::TEXT FROM place_amenity pa \
          WHERE pa.place_id = places.id ORDER BY pa.position) AS amenity_ids";

/// Column list for `reviews` queries.
const REVIEW_COLUMNS: &str = "id, created_at, updated_at, place_id, user_id, text";

fn columns(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Amenity => AMENITY_COLUMNS,
        EntityKind::City => CITY_COLUMNS,
        EntityKind::Place => PLACE_COLUMNS,
        EntityKind::Review => REVIEW_COLUMNS,
        EntityKind::State => STATE_COLUMNS,
        EntityKind::User => USER_COLUMNS,
    }
}

/// Build an upsert for `kind` over the shared base columns plus `fields`.
///
/// Bind order: `id`, `created_at`, `updated_at`, each of `fields`, then the
/// touched `updated_at` used when the row already exists. `created_at` is
/// never overwritten on conflict.
fn upsert_sql(kind: EntityKind, fields: &[&str]) -> String {
    let table = kind.table();
    let placeholders: Vec<String> = (0..fields.len()).map(|i| format!("${}", i + 4)).collect();
    let assignments: Vec<String> = fields.iter().map(|f| format!("{f} = EXCLUDED.{f}")).collect();
    let touched = fields.len() + 4;

    format!(
        "INSERT INTO {table} (id, created_at, updated_at, {columns}) \
         VALUES ($1, $2, $3, {placeholders}) \
         ON CONFLICT (id) DO UPDATE SET {assignments}, \
             updated_at = GREATEST(${touched}, {table}.updated_at + INTERVAL '1 microsecond')",
        columns = fields.join(", "),
        placeholders = placeholders.join(", "),
        assignments = assignments.join(", "),
    )
}

/// Relational storage backend over a PostgreSQL pool.
#[derive(Clone)]
pub struct DbStorage {
    pool: DbPool,
}

impl DbStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Select rows of one kind, optionally filtered on a single column.
    async fn fetch(
        &self,
        kind: EntityKind,
        filter: Option<(&str, &str)>,
    ) -> Result<Vec<Entity>, StorageError> {
        match kind {
            EntityKind::Amenity => self.fetch_rows::<Amenity>(kind, filter).await,
            EntityKind::City => self.fetch_rows::<City>(kind, filter).await,
            EntityKind::Place => self.fetch_rows::<Place>(kind, filter).await,
            EntityKind::Review => self.fetch_rows::<Review>(kind, filter).await,
            EntityKind::State => self.fetch_rows::<State>(kind, filter).await,
            EntityKind::User => self.fetch_rows::<User>(kind, filter).await,
        }
    }

    async fn fetch_rows<M>(
        &self,
        kind: EntityKind,
        filter: Option<(&str, &str)>,
    ) -> Result<Vec<Entity>, StorageError>
    where
        M: for<'r> FromRow<'r, PgRow> + Send + Unpin + Into<Entity>,
    {
        let mut query = format!("SELECT {} FROM {}", columns(kind), kind.table());
        if let Some((column, _)) = filter {
            query.push_str(&format!(" WHERE {column} = $1"));
        }
        query.push_str(" ORDER BY created_at, id");

        let mut rows = sqlx::query_as::<_, M>(&query);
        if let Some((_, value)) = filter {
            rows = rows.bind(value);
        }
        let rows = rows.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Write one entity inside `tx`, returning nothing; the caller re-reads.
    async fn upsert(
        tx: &mut Transaction<'_, Postgres>,
        entity: &Entity,
        touched: Timestamp,
    ) -> Result<(), sqlx::Error> {
        let BaseModel {
            id,
            created_at,
            updated_at,
        } = entity.base();
        let kind = entity.kind();

        match entity {
            Entity::State(state) => {
                sqlx::query(&upsert_sql(kind, &["name"]))
                    .bind(id)
                    .bind(created_at)
                    .bind(updated_at)
                    .bind(&state.name)
                    .bind(touched)
                    .execute(&mut **tx)
                    .await?;
            }
            Entity::City(city) => {
                sqlx::query(&upsert_sql(kind, &["state_id", "name"]))
                    .bind(id)
                    .bind(created_at)
                    .bind(updated_at)
                    .bind(&city.state_id)
                    .bind(&city.name)
                    .bind(touched)
                    .execute(&mut **tx)
                    .await?;
            }
            Entity::Amenity(amenity) => {
                sqlx::query(&upsert_sql(kind, &["name"]))
                    .bind(id)
                    .bind(created_at)
                    .bind(updated_at)
                    .bind(&amenity.name)
                    .bind(touched)
                    .execute(&mut **tx)
                    .await?;
            }
            Entity::User(user) => {
                sqlx::query(&upsert_sql(
                    kind,
                    &["email", "password", "first_name", "last_name"],
                ))
                .bind(id)
                .bind(created_at)
                .bind(updated_at)
                .bind(&user.email)
                .bind(&user.password)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(touched)
                .execute(&mut **tx)
                .await?;
            }
            Entity::Place(place) => {
                sqlx::query(&upsert_sql(
                    kind,
                    &[
                        "city_id",
                        "user_id",
                        "name",
                        "description",
                        "number_rooms",
                        "number_bathrooms",
                        "max_guest",
                        "price_by_night",
                        "latitude",
                        "longitude",
                    ],
                ))
                .bind(id)
                .bind(created_at)
                .bind(updated_at)
                .bind(&place.city_id)
                .bind(&place.user_id)
                .bind(&place.name)
                .bind(&place.description)
                .bind(place.number_rooms)
                .bind(place.number_bathrooms)
                .bind(place.max_guest)
                .bind(place.price_by_night)
                .bind(place.latitude)
                .bind(place.longitude)
                .bind(touched)
                .execute(&mut **tx)
                .await?;

                Self::sync_amenities(tx, place).await?;
            }
            Entity::Review(review) => {
                sqlx::query(&upsert_sql(kind, &["place_id", "user_id", "text"]))
                    .bind(id)
                    .bind(created_at)
                    .bind(updated_at)
                    .bind(&review.place_id)
                    .bind(&review.user_id)
                    .bind(&review.text)
                    .bind(touched)
                    .execute(&mut **tx)
                    .await?;
            }
        }

        Ok(())
    }

    /// Replace the link rows of `place` with its current `amenity_ids`.
    async fn sync_amenities(
        tx: &mut Transaction<'_, Postgres>,
        place: &Place,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM place_amenity WHERE place_id = $1")
            .bind(&place.base.id)
            .execute(&mut **tx)
            .await?;

        for (position, amenity_id) in place.amenity_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO place_amenity (place_id, amenity_id, position) VALUES ($1, $2, $3)",
            )
            .bind(&place.base.id)
            .bind(amenity_id)
            .bind(position as i32)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl Storage for DbStorage {
    async fn all(&self, kind: Option<EntityKind>) -> Result<IndexMap<String, Entity>, StorageError> {
        let kinds = match kind {
            Some(kind) => vec![kind],
            None => EntityKind::ALL.to_vec(),
        };

        let mut objects = IndexMap::new();
        for kind in kinds {
            for entity in self.fetch(kind, None).await? {
                objects.insert(entity.storage_key(), entity);
            }
        }
        Ok(objects)
    }

    async fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Entity>, StorageError> {
        Ok(self.fetch(kind, Some(("id", id))).await?.into_iter().next())
    }

    async fn persist(&self, entity: Entity) -> Result<Entity, StorageError> {
        let touched = types::touched_after(entity.base().updated_at);

        let mut tx = self.pool.begin().await?;
        Self::upsert(&mut tx, &entity, touched).await?;
        tx.commit().await?;

        tracing::debug!(kind = %entity.kind(), id = %entity.id(), "Entity persisted");

        self.get(entity.kind(), entity.id())
            .await?
            .ok_or(StorageError::Database(sqlx::Error::RowNotFound))
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), StorageError> {
        let query = format!("DELETE FROM {} WHERE id = $1", kind.table());
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        tracing::debug!(%kind, id, rows = result.rows_affected(), "Entity deleted");
        Ok(())
    }

    async fn count(&self, kind: Option<EntityKind>) -> Result<usize, StorageError> {
        let kinds = match kind {
            Some(kind) => vec![kind],
            None => EntityKind::ALL.to_vec(),
        };

        let mut total = 0usize;
        for kind in kinds {
            let query = format!("SELECT COUNT(*) FROM {}", kind.table());
            let count: i64 = sqlx::query_scalar(&query).fetch_one(&self.pool).await?;
            total += usize::try_from(count).unwrap_or_default();
        }
        Ok(total)
    }

    async fn list_children(
        &self,
        parent: EntityKind,
        parent_id: &str,
        child: EntityKind,
    ) -> Result<Vec<Entity>, StorageError> {
        let column = relation_column(parent, child)?;
        self.fetch(child, Some((column, parent_id))).await
    }

    async fn close(&self) -> Result<(), StorageError> {
        // Connections are checked out per query and returned on drop, so a
        // request never holds one past its last statement.
        tracing::trace!(
            idle = self.pool.num_idle(),
            size = self.pool.size(),
            "Database storage closed"
        );
        Ok(())
    }
}
