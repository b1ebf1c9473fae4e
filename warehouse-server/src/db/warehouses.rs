//! Warehouse / zone / shelf storage
//!
//! A warehouse is written as one cascade inside a single transaction:
//! root row, then each zone under it, then each shelf under its zone.

use async_trait::async_trait;
use shared::models::{ShelfRow, WarehouseCreated, WarehouseRow, Zone, ZoneRow};
use sqlx::PgPool;

use super::WarehouseStore;
use crate::error::ServiceResult;

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Insert the warehouse root and every zone and shelf beneath it.
///
/// Dropping the transaction on any `?` rolls the whole cascade back.
pub async fn create_layout(
    pool: &PgPool,
    zones: &[Zone],
    now: i64,
) -> Result<WarehouseCreated, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (warehouse_id,): (i64,) =
        sqlx::query_as("INSERT INTO warehouses (created_at) VALUES ($1) RETURNING id")
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;

    let mut shelf_count = 0;
    for zone in zones {
        let (zone_id,): (i64,) = sqlx::query_as(
            "INSERT INTO zones (warehouse_id, label) VALUES ($1, $2) RETURNING id",
        )
        .bind(warehouse_id)
        .bind(zone.label)
        .fetch_one(&mut *tx)
        .await?;

        for shelf in &zone.shelves {
            sqlx::query("INSERT INTO shelves (zone_id, name) VALUES ($1, $2)")
                .bind(zone_id)
                .bind(&shelf.name)
                .execute(&mut *tx)
                .await?;
            shelf_count += 1;
        }
    }

    tx.commit().await?;

    Ok(WarehouseCreated {
        warehouse_id,
        zone_count: zones.len(),
        shelf_count,
    })
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<WarehouseRow>, sqlx::Error> {
    sqlx::query_as("SELECT id, created_at FROM warehouses WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_zones(pool: &PgPool, warehouse_id: i64) -> Result<Vec<ZoneRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, warehouse_id, label FROM zones WHERE warehouse_id = $1 ORDER BY label",
    )
    .bind(warehouse_id)
    .fetch_all(pool)
    .await
}

pub async fn list_shelves(pool: &PgPool, zone_id: i64) -> Result<Vec<ShelfRow>, sqlx::Error> {
    sqlx::query_as("SELECT id, zone_id, name FROM shelves WHERE zone_id = $1 ORDER BY id")
        .bind(zone_id)
        .fetch_all(pool)
        .await
}

/// PostgreSQL-backed [`WarehouseStore`]
#[derive(Clone)]
pub struct PgWarehouseStore {
    pool: PgPool,
}

impl PgWarehouseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarehouseStore for PgWarehouseStore {
    async fn create_warehouse(&self, zones: &[Zone]) -> ServiceResult<WarehouseCreated> {
        Ok(create_layout(&self.pool, zones, now_millis()).await?)
    }

    async fn ping(&self) -> ServiceResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
