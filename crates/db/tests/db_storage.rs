//! Integration tests for the PostgreSQL backend.
//!
//! Each test gets a fresh database with the schema migrations applied.

use hbnb_core::kind::EntityKind;
use hbnb_db::models::amenity::{Amenity, CreateAmenity};
use hbnb_db::models::city::{City, CreateCity};
use hbnb_db::models::place::{CreatePlace, Place};
use hbnb_db::models::state::{CreateState, State, UpdateState};
use hbnb_db::models::user::{CreateUser, User};
use hbnb_db::models::{Entity, Model};
use hbnb_db::storage::{self, DbStorage, Storage};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_state(name: &str) -> State {
    State::new(CreateState {
        name: name.to_string(),
    })
}

async fn seed_place(store: &DbStorage) -> Place {
    let state = storage::persist_as(store, new_state("S")).await.unwrap();
    let city = storage::persist_as(
        store,
        City::new(state.base.id.clone(), CreateCity { name: "C".into() }),
    )
    .await
    .unwrap();
    let user = storage::persist_as(
        store,
        User::new(CreateUser {
            email: "host@b.c".into(),
            password: "pw".into(),
            first_name: None,
            last_name: None,
        }),
    )
    .await
    .unwrap();

    storage::persist_as(
        store,
        Place::new(
            city.base.id,
            CreatePlace {
                user_id: user.base.id,
                name: "Loft".into(),
                description: Some("Bright".into()),
                number_rooms: 2,
                number_bathrooms: 1,
                max_guest: 4,
                price_by_night: 90,
                latitude: Some(37.77),
                longitude: None,
            },
        ),
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn persist_then_get(pool: PgPool) {
    let store = DbStorage::new(pool);

    let state = storage::persist_as(&store, new_state("California")).await.unwrap();
    let fetched = storage::get_as::<State>(&store, state.id()).await.unwrap();

    assert_eq!(fetched, Some(state));
    assert!(storage::get_as::<State>(&store, "nope").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_keeps_created_at_and_moves_updated_at(pool: PgPool) {
    let store = DbStorage::new(pool);

    let created = storage::persist_as(&store, new_state("Old")).await.unwrap();
    let mut changed = created.clone();
    changed.apply(UpdateState {
        name: Some("New".into()),
    });
    let updated = storage::persist_as(&store, changed).await.unwrap();

    assert_eq!(updated.name, "New");
    assert_eq!(updated.base.created_at, created.base.created_at);
    assert!(updated.base.updated_at > created.base.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn all_count_and_delete(pool: PgPool) {
    let store = DbStorage::new(pool);

    let a = storage::persist_as(&store, new_state("A")).await.unwrap();
    storage::persist_as(&store, new_state("B")).await.unwrap();
    storage::persist_as(
        &store,
        Amenity::new(CreateAmenity {
            name: "Wifi".into(),
        }),
    )
    .await
    .unwrap();

    let all = store.all(None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(store.count(None).await.unwrap(), all.len());
    assert_eq!(store.count(Some(EntityKind::State)).await.unwrap(), 2);

    store.delete(EntityKind::State, a.id()).await.unwrap();
    store.delete(EntityKind::State, a.id()).await.unwrap();
    assert_eq!(store.count(Some(EntityKind::State)).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_children_filters_by_parent(pool: PgPool) {
    let store = DbStorage::new(pool);

    let a = storage::persist_as(&store, new_state("A")).await.unwrap();
    let b = storage::persist_as(&store, new_state("B")).await.unwrap();
    let a1 = storage::persist_as(
        &store,
        City::new(a.base.id.clone(), CreateCity { name: "A1".into() }),
    )
    .await
    .unwrap();
    storage::persist_as(
        &store,
        City::new(b.base.id.clone(), CreateCity { name: "B1".into() }),
    )
    .await
    .unwrap();

    let cities = storage::children_as::<City>(&store, EntityKind::State, a.id())
        .await
        .unwrap();
    assert_eq!(cities, vec![a1]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn place_round_trips_with_amenity_links(pool: PgPool) {
    let store = DbStorage::new(pool);
    let place = seed_place(&store).await;
    assert!(place.amenity_ids.is_empty());

    let wifi = storage::persist_as(&store, Amenity::new(CreateAmenity { name: "Wifi".into() }))
        .await
        .unwrap();
    let pool_amenity =
        storage::persist_as(&store, Amenity::new(CreateAmenity { name: "Pool".into() }))
            .await
            .unwrap();

    let mut linked = place.clone();
    linked.link_amenity(wifi.id());
    linked.link_amenity(pool_amenity.id());
    let linked = storage::persist_as(&store, linked).await.unwrap();
    assert_eq!(
        linked.amenity_ids,
        vec![wifi.base.id.clone(), pool_amenity.base.id.clone()]
    );

    let mut unlinked = linked.clone();
    unlinked.unlink_amenity(wifi.id());
    let unlinked = storage::persist_as(&store, unlinked).await.unwrap();
    assert_eq!(unlinked.amenity_ids, vec![pool_amenity.base.id.clone()]);

    let fetched = storage::get_as::<Place>(&store, place.id()).await.unwrap().unwrap();
    assert_eq!(fetched.description.as_deref(), Some("Bright"));
    assert_eq!(fetched.latitude, Some(37.77));
    assert_eq!(fetched.amenity_ids, unlinked.amenity_ids);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn entities_match_the_file_representation(pool: PgPool) {
    let store = DbStorage::new(pool);
    let state = storage::persist_as(&store, new_state("Same")).await.unwrap();

    let stored = store.get(EntityKind::State, state.id()).await.unwrap().unwrap();
    let dict = stored.to_dict();

    assert_eq!(dict["__class__"], "State");
    assert_eq!(dict["name"], "Same");
    assert_eq!(Entity::from(state).to_dict(), dict);
}
