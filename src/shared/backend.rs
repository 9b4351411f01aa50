// src/shared/backend.rs
//
// Availability gate: all required configuration values are checked once at
// startup. Any missing value, or a failure to connect, puts the process in
// Offline mode for its whole lifetime -- no retry, no re-check. Offline mode
// serves fallback content on reads and BACKEND_UNAVAILABLE on writes.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use deadpool_redis::{Config as RedisConfig, Runtime};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

/// The fixed set of values that must all be present for the backend to be
/// considered available.
#[derive(Clone)]
pub struct BackendConfig {
    pub database_url: String,
    pub redis_url: String,
    pub storage_bucket: String,
    pub jwt_secret: String,
    pub admin_email: String,
    pub admin_password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BackendConfigError {
    #[error("Missing required configuration value: {0}")]
    Missing(&'static str),
}

impl BackendConfig {
    pub fn from_env() -> Result<Self, BackendConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            storage_bucket: required("STORAGE_BUCKET")?,
            jwt_secret: required("JWT_SECRET")?,
            admin_email: required("ADMIN_EMAIL")?,
            admin_password_hash: required("ADMIN_PASSWORD_HASH")?,
        })
    }
}

fn required(key: &'static str) -> Result<String, BackendConfigError> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(BackendConfigError::Missing(key)),
    }
}

/// Constructed once in main and passed around; components see availability
/// through their wiring (offline store adapters), not a global flag.
#[derive(Clone)]
pub enum Backend {
    Online {
        db: Arc<DatabaseConnection>,
        redis: Arc<deadpool_redis::Pool>,
        config: BackendConfig,
    },
    Offline,
}

impl Backend {
    pub async fn connect(config: Result<BackendConfig, BackendConfigError>) -> Self {
        let config = match config {
            Ok(c) => c,
            Err(e) => {
                warn!("Backend configuration incomplete ({e}). Running in offline mode.");
                return Backend::Offline;
            }
        };

        let mut opt = ConnectOptions::new(config.database_url.clone());
        opt.max_connections(50)
            .min_connections(10)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        let db = match Database::connect(opt).await {
            Ok(conn) => Arc::new(conn),
            Err(e) => {
                warn!("Failed to connect to database: {e}. Running in offline mode.");
                return Backend::Offline;
            }
        };

        let redis = match RedisConfig::from_url(&config.redis_url).create_pool(Some(Runtime::Tokio1))
        {
            Ok(pool) => Arc::new(pool),
            Err(e) => {
                warn!("Failed to create Redis pool: {e}. Running in offline mode.");
                return Backend::Offline;
            }
        };

        info!("Backend connected");
        Backend::Online { db, redis, config }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Backend::Online { .. })
    }
}
