use std::net::IpAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;

/// Invalid or missing configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Which storage backend the server runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// JSON file store at the given path.
    File { path: PathBuf },
    /// PostgreSQL store at the given connection URL.
    Database { url: String },
}

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development except
/// `DATABASE_URL`, which is only required for the database backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Storage backend selection.
    pub storage: StorageBackend,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default      |
    /// |------------------------|--------------|
    /// | `HBNB_API_HOST`        | `0.0.0.0`    |
    /// | `HBNB_API_PORT`        | `5000`       |
    /// | `HBNB_TYPE_STORAGE`    | `file`       |
    /// | `HBNB_FILE_PATH`       | `file.json`  |
    /// | `DATABASE_URL`         | (none)       |
    /// | `CORS_ORIGINS`         | `*`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host_raw = var("HBNB_API_HOST", "0.0.0.0");
        let host = host_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "HBNB_API_HOST",
            expected: "an IP address",
            value: host_raw.clone(),
        })?;

        let port_raw = var("HBNB_API_PORT", "5000");
        let port = port_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "HBNB_API_PORT",
            expected: "a valid u16",
            value: port_raw.clone(),
        })?;

        let storage = match var("HBNB_TYPE_STORAGE", "file").as_str() {
            "file" => StorageBackend::File {
                path: PathBuf::from(var("HBNB_FILE_PATH", "file.json")),
            },
            "db" => StorageBackend::Database {
                url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            other => {
                return Err(ConfigError::Invalid {
                    var: "HBNB_TYPE_STORAGE",
                    expected: "'file' or 'db'",
                    value: other.to_string(),
                })
            }
        };

        let cors_origins = parse_cors_origins(&var("CORS_ORIGINS", "*"))?;

        let timeout_raw = var("REQUEST_TIMEOUT_SECS", "30");
        let request_timeout_secs = timeout_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "REQUEST_TIMEOUT_SECS",
            expected: "a valid u64",
            value: timeout_raw.clone(),
        })?;

        Ok(Self {
            host,
            port,
            storage,
            cors_origins,
            request_timeout_secs,
        })
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                expected: "a comma-separated list of origins",
                value: origin.to_string(),
            })
        })
        .collect::<Result<_, _>>()
        .map(CorsOrigins::List)
}
