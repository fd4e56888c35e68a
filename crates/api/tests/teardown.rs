//! Storage teardown must run for every request, including requests that
//! panic or time out inside the handler.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::get;
use hbnb_api::router::build_app_router;
use hbnb_api::state::AppState;
use hbnb_core::kind::EntityKind;
use hbnb_db::models::Entity;
use hbnb_db::storage::{Storage, StorageError};
use indexmap::IndexMap;

/// How `all` misbehaves.
#[derive(Clone, Copy)]
enum Failure {
    Panic,
    Stall,
}

/// Empty storage whose `all` panics or stalls and which counts `close` calls.
struct FaultyStorage {
    failure: Failure,
    closed: AtomicUsize,
}

#[async_trait]
impl Storage for FaultyStorage {
    async fn all(&self, _kind: Option<EntityKind>) -> Result<IndexMap<String, Entity>, StorageError> {
        match self.failure {
            Failure::Panic => panic!("storage exploded"),
            Failure::Stall => {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(IndexMap::new())
            }
        }
    }

    async fn get(&self, _kind: EntityKind, _id: &str) -> Result<Option<Entity>, StorageError> {
        Ok(None)
    }

    async fn persist(&self, entity: Entity) -> Result<Entity, StorageError> {
        Ok(entity)
    }

    async fn delete(&self, _kind: EntityKind, _id: &str) -> Result<(), StorageError> {
        Ok(())
    }

    async fn count(&self, _kind: Option<EntityKind>) -> Result<usize, StorageError> {
        Ok(0)
    }

    async fn list_children(
        &self,
        _parent: EntityKind,
        _parent_id: &str,
        _child: EntityKind,
    ) -> Result<Vec<Entity>, StorageError> {
        Ok(Vec::new())
    }

    async fn close(&self) -> Result<(), StorageError> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn app_over(storage: Arc<FaultyStorage>) -> axum::Router {
    let mut config = common::test_config("unused.json".into());
    config.request_timeout_secs = 1;
    build_app_router(AppState::new(storage, config))
}

#[tokio::test]
async fn teardown_runs_after_a_panicking_handler() {
    let storage = Arc::new(FaultyStorage {
        failure: Failure::Panic,
        closed: AtomicUsize::new(0),
    });

    let response = get(app_over(storage.clone()), "/api/v1/states").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(storage.closed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn teardown_runs_after_a_timed_out_handler() {
    let storage = Arc::new(FaultyStorage {
        failure: Failure::Stall,
        closed: AtomicUsize::new(0),
    });

    let response = get(app_over(storage.clone()), "/api/v1/states").await;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    assert_eq!(storage.closed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn teardown_runs_after_a_normal_request() {
    let storage = Arc::new(FaultyStorage {
        failure: Failure::Stall,
        closed: AtomicUsize::new(0),
    });

    let response = get(app_over(storage.clone()), "/api/v1/stats").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(storage.closed.load(Ordering::SeqCst), 1);
}
