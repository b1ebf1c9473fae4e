//! Warehouse layout models
//!
//! `Zone`/`Shelf` are the wire shapes exchanged between the form client and
//! the server. The `*Row` types mirror the persisted relations.

use serde::{Deserialize, Serialize};

/// Named storage unit inside one zone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shelf {
    pub name: String,
}

impl Shelf {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One physical subdivision of a warehouse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Expected in 1..=12; the server checks it.
    pub label: i32,
    #[serde(default)]
    pub shelves: Vec<Shelf>,
}

impl Zone {
    /// Zone with no shelves
    pub fn empty(label: i32) -> Self {
        Self {
            label,
            shelves: Vec::new(),
        }
    }

    /// Zone holding shelves with the given names, in order
    pub fn with_shelves<I, S>(label: i32, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label,
            shelves: names.into_iter().map(Shelf::new).collect(),
        }
    }

    /// Shelf names in order
    pub fn shelf_names(&self) -> impl Iterator<Item = &str> {
        self.shelves.iter().map(|s| s.name.as_str())
    }
}

/// Persisted warehouse root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WarehouseRow {
    pub id: i64,
    pub created_at: i64,
}

/// Persisted zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ZoneRow {
    pub id: i64,
    pub warehouse_id: i64,
    pub label: i32,
}

/// Persisted shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ShelfRow {
    pub id: i64,
    pub zone_id: i64,
    pub name: String,
}

/// Receipt returned by `POST /api/addwarehouse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseCreated {
    pub warehouse_id: i64,
    pub zone_count: usize,
    pub shelf_count: usize,
}
