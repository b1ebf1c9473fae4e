//! Liveness and health endpoints

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Fixed body returned by `GET /`
pub const LIVENESS_BODY: &str = "warehouse server is running";

pub async fn liveness() -> &'static str {
    LIVENESS_BODY
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    database: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.store.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            "error"
        }
    };

    Json(HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        service: "warehouse-server",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
