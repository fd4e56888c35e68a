//! Integration tests for the JSON file backend.

use assert_matches::assert_matches;
use hbnb_core::kind::EntityKind;
use hbnb_db::models::city::{City, CreateCity};
use hbnb_db::models::state::{CreateState, State, UpdateState};
use hbnb_db::models::user::{CreateUser, User};
use hbnb_db::models::{Entity, Model};
use hbnb_db::storage::{self, FileStorage, Storage, StorageError};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn open(dir: &TempDir) -> FileStorage {
    FileStorage::open(dir.path().join("file.json")).await.unwrap()
}

fn new_state(name: &str) -> State {
    State::new(CreateState {
        name: name.to_string(),
    })
}

fn new_city(state_id: &str, name: &str) -> City {
    City::new(
        state_id.to_string(),
        CreateCity {
            name: name.to_string(),
        },
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn persist_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir).await;

    let state = storage::persist_as(&store, new_state("California")).await.unwrap();
    let fetched = storage::get_as::<State>(&store, state.id()).await.unwrap();

    assert_eq!(fetched, Some(state));
    assert_eq!(storage::get_as::<State>(&store, "nope").await.unwrap(), None);
}

#[tokio::test]
async fn get_is_scoped_by_kind() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir).await;

    let state = storage::persist_as(&store, new_state("Ohio")).await.unwrap();
    let as_city = store.get(EntityKind::City, state.id()).await.unwrap();

    assert!(as_city.is_none());
}

#[tokio::test]
async fn all_is_keyed_by_class_and_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir).await;

    let state = storage::persist_as(&store, new_state("A")).await.unwrap();
    storage::persist_as(&store, new_city(state.id(), "X")).await.unwrap();

    let all = store.all(None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.contains_key(&format!("State.{}", state.id())));

    let states = store.all(Some(EntityKind::State)).await.unwrap();
    assert_eq!(states.len(), 1);
    assert_eq!(store.count(None).await.unwrap(), all.len());
    assert_eq!(store.count(Some(EntityKind::City)).await.unwrap(), 1);
}

#[tokio::test]
async fn update_keeps_created_at_and_moves_updated_at() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir).await;

    let created = storage::persist_as(&store, new_state("Old")).await.unwrap();
    assert_eq!(created.base.created_at, created.base.updated_at);

    let mut first = created.clone();
    first.apply(UpdateState {
        name: Some("New".into()),
    });
    let first = storage::persist_as(&store, first).await.unwrap();
    let second = storage::persist_as(&store, first.clone()).await.unwrap();

    assert_eq!(first.name, "New");
    assert_eq!(first.base.created_at, created.base.created_at);
    assert!(first.base.updated_at > created.base.updated_at);
    assert!(second.base.updated_at > first.base.updated_at);
}

#[tokio::test]
async fn delete_removes_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir).await;

    let state = storage::persist_as(&store, new_state("Gone")).await.unwrap();
    store.delete(EntityKind::State, state.id()).await.unwrap();
    store.delete(EntityKind::State, state.id()).await.unwrap();

    assert_eq!(store.count(None).await.unwrap(), 0);
}

#[tokio::test]
async fn reopen_round_trips_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir).await;

    let user = User::new(CreateUser {
        email: "a@b.c".into(),
        password: "pw".into(),
        first_name: Some("Ada".into()),
        last_name: None,
    });
    let user = storage::persist_as(&store, user).await.unwrap();
    let state = storage::persist_as(&store, new_state("Kept")).await.unwrap();

    let reopened = open(&dir).await;
    let all = reopened.all(None).await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(
        all.values().cloned().collect::<Vec<_>>(),
        vec![Entity::from(user), Entity::from(state)]
    );
}

#[tokio::test]
async fn file_is_a_json_object_tagged_by_class() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir).await;
    let state = storage::persist_as(&store, new_state("Tagged")).await.unwrap();

    let raw = std::fs::read(store.path()).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    let stored = &json[format!("State.{}", state.id())];

    assert_eq!(stored["__class__"], "State");
    assert_eq!(stored["name"], "Tagged");
}

#[tokio::test]
async fn close_picks_up_external_changes() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir).await;
    let other = open(&dir).await;

    storage::persist_as(&other, new_state("Elsewhere")).await.unwrap();
    assert_eq!(store.count(None).await.unwrap(), 0);

    store.close().await.unwrap();
    assert_eq!(store.count(None).await.unwrap(), 1);
}

#[tokio::test]
async fn list_children_follows_reference_column() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir).await;

    let a = storage::persist_as(&store, new_state("A")).await.unwrap();
    let b = storage::persist_as(&store, new_state("B")).await.unwrap();
    let a1 = storage::persist_as(&store, new_city(a.id(), "A1")).await.unwrap();
    storage::persist_as(&store, new_city(b.id(), "B1")).await.unwrap();

    let cities = storage::children_as::<City>(&store, EntityKind::State, a.id())
        .await
        .unwrap();
    assert_eq!(cities, vec![a1]);
}

#[tokio::test]
async fn list_children_rejects_unrelated_kinds() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir).await;

    let result = store
        .list_children(EntityKind::Amenity, "x", EntityKind::City)
        .await;

    assert_matches!(
        result,
        Err(StorageError::InvalidRelation {
            parent: EntityKind::Amenity,
            child: EntityKind::City,
        })
    );
}
