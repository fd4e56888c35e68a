#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use hbnb_api::config::{CorsOrigins, ServerConfig, StorageBackend};
use hbnb_api::router::build_app_router;
use hbnb_api::state::AppState;
use hbnb_db::storage::{FileStorage, Storage};

/// Build a test `ServerConfig` pointing the file backend at `path`.
pub fn test_config(path: std::path::PathBuf) -> ServerConfig {
    ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        storage: StorageBackend::File { path },
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
    }
}

/// A router over a file store living in its own temporary directory.
///
/// The directory is removed when the context is dropped.
pub struct TestContext {
    pub storage: Arc<dyn Storage>,
    router: Router,
    _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.json");
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(path.clone()).await.unwrap());

        let state = AppState::new(storage.clone(), test_config(path));
        Self {
            storage,
            router: build_app_router(state),
            _dir: dir,
        }
    }

    /// A fresh handle on the full application router.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Body::from(body.to_string())).await
}

/// POST an arbitrary, possibly malformed, body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string())).await
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an entity through the API and return its JSON form.
pub async fn create(ctx: &TestContext, uri: &str, body: Value) -> Value {
    let response = post_json(ctx.app(), uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED, "POST {uri}");
    body_json(response).await
}

/// Id of a JSON entity as an owned string.
pub fn id_of(json: &Value) -> String {
    json["id"].as_str().unwrap().to_string()
}
