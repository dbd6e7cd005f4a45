//! Overview page routes: stat cards, performance charts, recent-activity
//! feed, and the alerts placeholder.
//!
//! The chart series and the activity feed are page-local mock data, owned
//! here the way every page owns its own collections. Stat-card figures are
//! derived from the live stores.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::domain::{Alert, FlockStatus, PondStatus};
use crate::state::AppState;

#[derive(Serialize)]
pub struct StatCards {
    pub total_poultry: u32,
    pub total_ponds: usize,
    pub revenue_mtd: f64,
    pub active_alerts: usize,
}

/// One point of the weekly growth / feed / mortality series.
#[derive(Clone, Serialize)]
pub struct PerformancePoint {
    pub label: &'static str,
    pub feed: u32,
    pub weight: u32,
    pub mortality: u32,
}

#[derive(Clone, Serialize)]
pub struct FeedItem {
    pub action: &'static str,
    pub target: &'static str,
    pub user: &'static str,
    pub time: &'static str,
}

#[derive(Serialize)]
pub struct OverviewResponse {
    pub farm_name: String,
    pub stats: StatCards,
    pub performance: Vec<PerformancePoint>,
    pub recent_activity: Vec<FeedItem>,
}

/// `GET /api/overview` — everything the dashboard page renders.
pub async fn overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    let total_poultry = {
        let poultry = state.poultry.read().await;
        poultry
            .flocks
            .iter()
            .filter(|f| f.status == FlockStatus::Active)
            .map(|f| f.current_count)
            .sum()
    };
    let total_ponds = {
        let catfish = state.catfish.read().await;
        catfish
            .ponds
            .iter()
            .filter(|p| p.status == PondStatus::Active)
            .count()
    };
    let revenue_mtd = {
        let finance = state.finance.read().await;
        finance
            .transactions
            .iter()
            .map(|t| t.amount.max(0.0))
            .sum()
    };
    let active_alerts = state.alerts.read().await.alerts.len();

    Json(OverviewResponse {
        farm_name: state.farm_name.clone(),
        stats: StatCards { total_poultry, total_ponds, revenue_mtd, active_alerts },
        performance: performance_series(),
        recent_activity: recent_activity_feed(),
    })
}

#[derive(Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
    /// True when no unread alert remains — the page's "All Systems Normal"
    /// empty state.
    pub all_clear: bool,
}

/// `GET /api/alerts` — static placeholder page.
pub async fn alerts(State(state): State<AppState>) -> Json<AlertsResponse> {
    let store = state.alerts.read().await;
    let all_clear = store.alerts.iter().all(|a| a.is_read);
    Json(AlertsResponse { alerts: store.alerts.clone(), all_clear })
}

pub(crate) fn performance_series() -> Vec<PerformancePoint> {
    vec![
        PerformancePoint { label: "Week 1", feed: 400, weight: 240, mortality: 2 },
        PerformancePoint { label: "Week 2", feed: 300, weight: 139, mortality: 5 },
        PerformancePoint { label: "Week 3", feed: 200, weight: 980, mortality: 1 },
        PerformancePoint { label: "Week 4", feed: 278, weight: 390, mortality: 8 },
        PerformancePoint { label: "Week 5", feed: 189, weight: 480, mortality: 3 },
        PerformancePoint { label: "Week 6", feed: 239, weight: 380, mortality: 4 },
        PerformancePoint { label: "Week 7", feed: 349, weight: 430, mortality: 2 },
    ]
}

pub(crate) fn recent_activity_feed() -> Vec<FeedItem> {
    vec![
        FeedItem { action: "Feed Logged", target: "Pond #4", user: "James Wilson", time: "10 mins ago" },
        FeedItem { action: "Water Quality Alert", target: "Pond #12", user: "System", time: "1 hour ago" },
        FeedItem { action: "Vaccination Completed", target: "Flock #B2", user: "Dr. Sarah", time: "3 hours ago" },
        FeedItem { action: "Batch Harvested", target: "Pond #8", user: "Mike Ross", time: "Yesterday" },
    ]
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
