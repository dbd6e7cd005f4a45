use super::*;
use crate::domain::{ActivityStatus, ActivityType};
use crate::state::test_helpers;
use axum::extract::{Path, State};

#[tokio::test]
async fn list_flocks_returns_seeded_flocks() {
    let state = test_helpers::test_app_state();
    let Json(flocks) = list_flocks(State(state)).await;
    assert_eq!(flocks.len(), 2);
    assert_eq!(flocks[0].id, "F001");
}

#[tokio::test]
async fn create_activity_lands_on_selected_flock_as_completed() {
    let state = test_helpers::test_app_state();
    let form = NewActivity {
        activity_type: ActivityType::Vaccination,
        date: None,
        product: Some("Newcastle Vaccine".into()),
        technician: "Dr. Sarah".into(),
        notes: None,
    };

    let Json(created) = create_activity(State(state.clone()), Path("F002".into()), Json(form)).await;
    assert_eq!(created.flock_id, "F002");
    assert_eq!(created.status, ActivityStatus::Completed);

    let store = state.poultry.read().await;
    assert_eq!(store.activities.len(), 5);
    assert_eq!(store.activities[0].id, created.id);
}

#[tokio::test]
async fn list_activities_is_scoped_and_sorted() {
    let state = test_helpers::test_app_state();
    let Json(activities) = list_activities(State(state), Path("F001".into())).await;
    assert_eq!(activities.len(), 3);
    assert!(activities.windows(2).all(|w| w[0].date >= w[1].date));
}

#[tokio::test]
async fn egg_log_listing_includes_summary() {
    let state = test_helpers::test_app_state();
    let Json(response) = list_egg_logs(State(state), Path("F001".into())).await;
    assert_eq!(response.logs.len(), 2);
    assert_eq!(response.summary.entries, 2);
    assert_eq!(response.summary.total_quantity, 8350);
}

#[tokio::test]
async fn create_egg_log_appears_in_listing() {
    let state = test_helpers::test_app_state();
    let form = NewEggLog { date: None, quantity: 4000, collected_by: "Mike Ross".into(), notes: None };

    create_egg_log(State(state.clone()), Path("F001".into()), Json(form)).await;

    let Json(response) = list_egg_logs(State(state), Path("F001".into())).await;
    assert_eq!(response.logs.len(), 3);
    assert_eq!(response.summary.total_quantity, 12350);
}
