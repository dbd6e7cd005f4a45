//! Poultry page routes: flocks, activity log, egg-production log.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Serialize;

use crate::domain::{EggProductionLog, Flock, PoultryActivity};
use crate::services::poultry::{self, EggSummary, NewActivity, NewEggLog};
use crate::state::AppState;

/// `GET /api/flocks` — the flock list panel.
pub async fn list_flocks(State(state): State<AppState>) -> Json<Vec<Flock>> {
    let store = state.poultry.read().await;
    Json(store.flocks.clone())
}

/// `GET /api/flocks/:id/activities` — activity history, newest first.
pub async fn list_activities(
    State(state): State<AppState>,
    Path(flock_id): Path<String>,
) -> Json<Vec<PoultryActivity>> {
    let store = state.poultry.read().await;
    Json(poultry::activities_for_flock(&store, &flock_id))
}

/// `POST /api/flocks/:id/activities` — the activity-log form submission.
pub async fn create_activity(
    State(state): State<AppState>,
    Path(flock_id): Path<String>,
    Json(form): Json<NewActivity>,
) -> Json<PoultryActivity> {
    tracing::info!(%flock_id, activity_type = ?form.activity_type, "poultry: activity logged");
    let mut store = state.poultry.write().await;
    Json(poultry::log_activity(&mut store, &flock_id, form))
}

#[derive(Serialize)]
pub struct EggLogResponse {
    pub summary: EggSummary,
    pub logs: Vec<EggProductionLog>,
}

/// `GET /api/flocks/:id/egg-logs` — production history plus summary stats.
pub async fn list_egg_logs(State(state): State<AppState>, Path(flock_id): Path<String>) -> Json<EggLogResponse> {
    let store = state.poultry.read().await;
    let logs = poultry::egg_logs_for_flock(&store, &flock_id);
    let summary = poultry::egg_summary(&logs);
    Json(EggLogResponse { summary, logs })
}

/// `POST /api/flocks/:id/egg-logs` — the daily egg-collection form.
pub async fn create_egg_log(
    State(state): State<AppState>,
    Path(flock_id): Path<String>,
    Json(form): Json<NewEggLog>,
) -> Json<EggProductionLog> {
    tracing::info!(%flock_id, quantity = form.quantity, "poultry: eggs logged");
    let mut store = state.poultry.write().await;
    Json(poultry::log_eggs(&mut store, &flock_id, form))
}

#[cfg(test)]
#[path = "poultry_test.rs"]
mod tests;
