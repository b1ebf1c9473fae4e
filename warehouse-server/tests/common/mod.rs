//! Test helpers: an in-memory `WarehouseStore` and request plumbing

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{HeaderValue, Request, StatusCode};
use http_body_util::BodyExt;
use shared::models::{ShelfRow, WarehouseCreated, WarehouseRow, Zone, ZoneRow};
use tower::ServiceExt;
use warehouse_server::{AppState, ServiceError, ServiceResult, WarehouseStore, api};

pub const ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub warehouses: Vec<WarehouseRow>,
    pub zones: Vec<ZoneRow>,
    pub shelves: Vec<ShelfRow>,
}

impl Tables {
    pub fn is_empty(&self) -> bool {
        self.warehouses.is_empty() && self.zones.is_empty() && self.shelves.is_empty()
    }
}

/// Store that keeps rows in memory and can be switched into a failing mode
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    failing: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        store
    }

    pub fn snapshot(&self) -> Tables {
        self.tables.lock().unwrap().clone()
    }
}

#[async_trait]
impl WarehouseStore for MemoryStore {
    async fn create_warehouse(&self, zones: &[Zone]) -> ServiceResult<WarehouseCreated> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ServiceError::Db("connection reset by peer".into()));
        }

        let mut tables = self.tables.lock().unwrap();
        let warehouse_id = tables.warehouses.len() as i64 + 1;
        tables.warehouses.push(WarehouseRow {
            id: warehouse_id,
            created_at: 0,
        });

        let mut shelf_count = 0;
        for zone in zones {
            let zone_id = tables.zones.len() as i64 + 1;
            tables.zones.push(ZoneRow {
                id: zone_id,
                warehouse_id,
                label: zone.label,
            });
            for shelf in &zone.shelves {
                let id = tables.shelves.len() as i64 + 1;
                tables.shelves.push(ShelfRow {
                    id,
                    zone_id,
                    name: shelf.name.clone(),
                });
                shelf_count += 1;
            }
        }

        Ok(WarehouseCreated {
            warehouse_id,
            zone_count: zones.len(),
            shelf_count,
        })
    }

    async fn ping(&self) -> ServiceResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ServiceError::Db("connection refused".into()));
        }
        Ok(())
    }
}

pub fn app(store: &MemoryStore) -> Router {
    api::create_router(
        AppState::with_store(store.clone()),
        HeaderValue::from_static(ORIGIN),
    )
}

/// Twelve empty zones labeled 1..=12
pub fn blank_layout() -> Vec<Zone> {
    (1..=12).map(Zone::empty).collect()
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub fn submit(zones: &[Zone]) -> Request<Body> {
    post_json(
        "/api/addwarehouse",
        serde_json::to_vec(zones).unwrap(),
    )
}

/// Run one request and return status, headers and the JSON body
pub async fn call(app: Router, request: Request<Body>) -> (StatusCode, http::HeaderMap, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, headers, body)
}
