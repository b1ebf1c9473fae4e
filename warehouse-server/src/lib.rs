//! warehouse-server: warehouse layout submission service
//!
//! - Accepts a full 12-zone layout at `POST /api/addwarehouse`
//! - Re-validates it with `shared::layout::validate_layout`
//! - Writes warehouse, zones and shelves to PostgreSQL in one transaction

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use config::Config;
pub use db::WarehouseStore;
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;
