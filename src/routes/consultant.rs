//! Consultant panel routes: transcript read and message submission.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::domain::ChatMessage;
use crate::services::consultant::{self, ConsultantError};
use crate::state::AppState;

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
}

/// `GET /api/consultant` — the transcript as currently visible.
pub async fn transcript(State(state): State<AppState>) -> Json<TranscriptResponse> {
    let transcript = state.transcript.read().await;
    Json(TranscriptResponse { messages: transcript.messages.clone(), pending: transcript.pending })
}

#[derive(Deserialize)]
pub struct SubmitBody {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub reply: ChatMessage,
}

/// `POST /api/consultant` — submit one user message; resolves once the
/// assistant reply (advice or fallback) has been appended.
pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<SubmitBody>,
) -> Result<Json<SubmitResponse>, StatusCode> {
    let reply = consultant::submit(&state, &body.text)
        .await
        .map_err(consultant_error_to_status)?;
    Ok(Json(SubmitResponse { reply }))
}

pub(crate) fn consultant_error_to_status(err: ConsultantError) -> StatusCode {
    match err {
        ConsultantError::EmptyMessage => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

#[cfg(test)]
#[path = "consultant_test.rs"]
mod tests;
