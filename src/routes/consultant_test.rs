use super::*;
use crate::advice::FALLBACK_TEXT;
use crate::domain::ChatRole;
use crate::state::test_helpers;
use axum::extract::State;

#[test]
fn consultant_error_to_status_maps_empty_message() {
    assert_eq!(
        consultant_error_to_status(ConsultantError::EmptyMessage),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn transcript_route_returns_greeting() {
    let state = test_helpers::test_app_state();
    let Json(response) = transcript(State(state)).await;
    assert_eq!(response.messages.len(), 1);
    assert_eq!(response.messages[0].role, ChatRole::Assistant);
    assert!(!response.pending);
}

#[tokio::test]
async fn submit_route_rejects_blank_text() {
    let state = test_helpers::test_app_state();
    let err = submit(State(state), Json(SubmitBody { text: "   ".into() }))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_route_without_client_returns_fallback_reply() {
    let state = test_helpers::test_app_state();
    let Json(response) = submit(State(state.clone()), Json(SubmitBody { text: "hello".into() }))
        .await
        .unwrap();
    assert_eq!(response.reply.role, ChatRole::Assistant);
    assert_eq!(response.reply.text, FALLBACK_TEXT);

    let transcript = state.transcript.read().await;
    assert_eq!(transcript.messages.len(), 3);
}
