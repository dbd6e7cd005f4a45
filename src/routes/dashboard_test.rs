use super::*;
use crate::state::test_helpers;
use axum::extract::State;

#[tokio::test]
async fn overview_stats_derived_from_stores() {
    let state = test_helpers::test_app_state();
    let Json(response) = overview(State(state)).await;

    assert_eq!(response.farm_name, "Green Valley Farm");
    assert_eq!(response.stats.total_poultry, 6900);
    assert_eq!(response.stats.total_ponds, 2);
    assert!((response.stats.revenue_mtd - 8700.0).abs() < f64::EPSILON);
    assert_eq!(response.stats.active_alerts, 3);
}

#[tokio::test]
async fn overview_carries_page_local_series() {
    let state = test_helpers::test_app_state();
    let Json(response) = overview(State(state)).await;
    assert_eq!(response.performance.len(), 7);
    assert_eq!(response.performance[0].label, "Week 1");
    assert_eq!(response.recent_activity.len(), 4);
}

#[tokio::test]
async fn alerts_page_reports_all_clear_when_everything_read() {
    let state = test_helpers::test_app_state();
    let Json(response) = alerts(State(state)).await;
    assert_eq!(response.alerts.len(), 3);
    assert!(response.all_clear);
}

#[test]
fn performance_series_is_seven_weeks() {
    let series = performance_series();
    assert_eq!(series.len(), 7);
    assert_eq!(series[2].weight, 980);
    assert_eq!(series[3].mortality, 8);
}
