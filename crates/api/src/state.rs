use std::sync::Arc;

use hbnb_db::storage::{DbStorage, FileStorage, Storage, StorageError};

use crate::config::{ServerConfig, StorageBackend};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The storage engine, constructed once at startup.
    pub storage: Arc<dyn Storage>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }
}

/// Construct the configured storage backend.
///
/// The database backend connects, checks health and applies migrations
/// before it is handed out.
pub async fn build_storage(backend: &StorageBackend) -> Result<Arc<dyn Storage>, StorageError> {
    match backend {
        StorageBackend::File { path } => {
            let storage = FileStorage::open(path.clone()).await?;
            tracing::info!(path = %path.display(), "File storage opened");
            Ok(Arc::new(storage))
        }
        StorageBackend::Database { url } => {
            let pool = hbnb_db::create_pool(url).await?;
            tracing::info!("Database connection pool created");

            hbnb_db::health_check(&pool).await?;
            tracing::info!("Database health check passed");

            hbnb_db::run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(DbStorage::new(pool)))
        }
    }
}
