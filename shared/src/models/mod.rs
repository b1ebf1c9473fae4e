//! Data models shared between the warehouse server and client

pub mod warehouse;

pub use warehouse::{Shelf, ShelfRow, WarehouseCreated, WarehouseRow, Zone, ZoneRow};
