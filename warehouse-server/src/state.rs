//! Application state

use std::sync::Arc;

use crate::config::Config;
use crate::db::{self, PgWarehouseStore, WarehouseStore};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Where submitted warehouses are written
    pub store: Arc<dyn WarehouseStore>,
}

impl AppState {
    /// State backed by an arbitrary store
    pub fn with_store(store: impl WarehouseStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Connect to PostgreSQL, run migrations and build the state
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database_url, &config.pool)
            .await
            .map_err(|e| e.to_string())?;
        tracing::info!(
            max_connections = config.pool.max_connections,
            "Database pool ready"
        );

        Ok(Self::with_store(PgWarehouseStore::new(pool)))
    }
}
