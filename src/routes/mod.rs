//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Five page surfaces (overview, poultry, catfish, finance, alerts) plus the
//! consultant panel, all under `/api`, with the static dashboard shell
//! served at `/`. Unknown paths fall back to the shell, which routes
//! client-side and redirects anything it does not recognize to the overview.

pub mod catfish;
pub mod consultant;
pub mod dashboard;
pub mod finance;
pub mod poultry;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/overview", get(dashboard::overview))
        .route("/api/alerts", get(dashboard::alerts))
        .route("/api/flocks", get(poultry::list_flocks))
        .route(
            "/api/flocks/{id}/activities",
            get(poultry::list_activities).post(poultry::create_activity),
        )
        .route(
            "/api/flocks/{id}/egg-logs",
            get(poultry::list_egg_logs).post(poultry::create_egg_log),
        )
        .route("/api/ponds", get(catfish::list_ponds))
        .route("/api/finance", get(finance::ledger))
        .route("/api/ponds/{id}/water-logs", get(catfish::list_water_logs))
        .route("/api/ponds/{id}/water-change", axum::routing::post(catfish::record_water_change))
        .route("/api/consultant", get(consultant::transcript).post(consultant::submit))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Resolve the path to the static dashboard shell.
fn website_dir() -> PathBuf {
    std::env::var("WEBSITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("website"))
}

/// Full application: API routes plus the static shell with an index
/// fallback, so any unrecognized path lands back on the overview page.
pub fn app(state: AppState) -> Router {
    let website = website_dir();
    let shell = ServeDir::new(&website)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(website.join("index.html")));

    api_routes(state)
        .fallback_service(shell)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
