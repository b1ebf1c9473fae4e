//! Warehouse submission API
//!
//! POST /api/addwarehouse: validate a full 12-zone layout, then write it

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use shared::error::{ApiResponse, AppError};
use shared::layout::validate_layout;
use shared::models::{WarehouseCreated, Zone};

use crate::error::ServiceResult;
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Warehouse added successfully!";

pub async fn add_warehouse(
    State(state): State<AppState>,
    payload: Result<Json<Vec<Zone>>, JsonRejection>,
) -> ServiceResult<ApiResponse<WarehouseCreated>> {
    let Json(zones) = payload.map_err(|rejection| {
        tracing::info!(error = %rejection.body_text(), "Unparsable warehouse request");
        AppError::invalid_format(rejection.body_text())
    })?;

    let summary = validate_layout(&zones).map_err(|e| {
        tracing::info!(reason = %e, zones = zones.len(), "Malformed warehouse request");
        AppError::from(e)
    })?;

    let created = state.store.create_warehouse(&zones).await?;

    tracing::info!(
        warehouse_id = created.warehouse_id,
        zones = summary.zone_count,
        shelves = summary.shelf_count,
        "Warehouse added"
    );

    Ok(ApiResponse::success_with_message(SUCCESS_MESSAGE, created))
}
