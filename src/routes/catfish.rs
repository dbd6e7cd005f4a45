//! Catfish page routes: pond cards, maintenance history, water-change
//! quick action.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::domain::{Pond, WaterLogEntry};
use crate::services::catfish::{self, PondError};
use crate::services::today_utc;
use crate::state::AppState;

/// Pond card view: the record plus the staleness figure the card renders.
#[derive(Serialize)]
pub struct PondView {
    #[serde(flatten)]
    pub pond: Pond,
    pub days_since_water_change: i64,
}

/// `GET /api/ponds` — all ponds with days since last water change.
pub async fn list_ponds(State(state): State<AppState>) -> Json<Vec<PondView>> {
    let today = today_utc();
    let store = state.catfish.read().await;
    let ponds = store
        .ponds
        .iter()
        .map(|p| PondView { days_since_water_change: catfish::days_since_water_change(p, today), pond: p.clone() })
        .collect();
    Json(ponds)
}

/// `GET /api/ponds/:id/water-logs` — maintenance history, newest first.
pub async fn list_water_logs(
    State(state): State<AppState>,
    Path(pond_id): Path<String>,
) -> Json<Vec<WaterLogEntry>> {
    let store = state.catfish.read().await;
    Json(catfish::water_logs_for_pond(&store, &pond_id))
}

/// `POST /api/ponds/:id/water-change` — the quick action. Updates the pond
/// and prepends the log entry under one store lock.
pub async fn record_water_change(
    State(state): State<AppState>,
    Path(pond_id): Path<String>,
) -> Result<Json<WaterLogEntry>, StatusCode> {
    tracing::info!(%pond_id, "catfish: water change recorded");
    let mut store = state.catfish.write().await;
    let entry = catfish::record_water_change(&mut store, &pond_id).map_err(pond_error_to_status)?;
    Ok(Json(entry))
}

pub(crate) fn pond_error_to_status(err: PondError) -> StatusCode {
    match err {
        PondError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
#[path = "catfish_test.rs"]
mod tests;
