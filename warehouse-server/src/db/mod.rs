//! Database access layer

pub mod warehouses;

use async_trait::async_trait;
use shared::models::{WarehouseCreated, Zone};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::PoolConfig;
use crate::error::ServiceResult;

pub use warehouses::PgWarehouseStore;

/// Persistence seam used by the HTTP layer
#[async_trait]
pub trait WarehouseStore: Send + Sync {
    /// Write a warehouse with all its zones and shelves.
    ///
    /// Either every row is committed or none is.
    async fn create_warehouse(&self, zones: &[Zone]) -> ServiceResult<WarehouseCreated>;

    /// Cheap round-trip used by the health endpoint
    async fn ping(&self) -> ServiceResult<()>;
}

/// Open the connection pool and bring the schema up to date
pub async fn connect(database_url: &str, pool: &PoolConfig) -> ServiceResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(pool.max_connections)
        .min_connections(pool.min_connections)
        .acquire_timeout(pool.acquire_timeout)
        .idle_timeout(pool.idle_timeout)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}
