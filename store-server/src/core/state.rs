//! Server state

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared handle passed to every handler.
///
/// Cheap to clone: the pool is internally reference counted and the
/// config is small.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
}

impl ServerState {
    /// Open the database (running migrations) and build the state.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            config: config.clone(),
            pool: db.pool,
        })
    }

    /// Build state over an existing pool (tests).
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }
}
