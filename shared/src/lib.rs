//! Shared types for the warehouse layout service
//!
//! Wire models, layout rules and the error system used by both the
//! server and the form client.

pub mod error;
pub mod layout;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use layout::{LayoutError, LayoutSummary, validate_layout};
pub use models::{Shelf, WarehouseCreated, Zone};
