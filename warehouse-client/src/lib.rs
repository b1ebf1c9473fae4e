//! Warehouse client
//!
//! Form state for editing a warehouse layout zone by zone, and the HTTP
//! client that submits it to the warehouse server.

pub mod config;
pub mod error;
pub mod form;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{Committed, FormError, FormResult, FormState, ShelfDelta};
pub use http::{HttpClient, WarehouseApi};
