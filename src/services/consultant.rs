//! Consultant service — transcript state machine around the advice flow.
//!
//! DESIGN
//! ======
//! Three observable transcript states: idle, pending (one advice request in
//! flight), settled (reply appended, back to idle). The user message is
//! appended synchronously before the request is issued and the assistant
//! message only after the awaited response returns, so the transcript
//! alternates in submission order even though the call is asynchronous. The
//! advice flow absorbs all failures into a display string, so this service
//! has only a happy path. Concurrent submissions are not structurally
//! prevented; the lock is released across the awaited call.

use tracing::info;

use crate::advice::get_farm_advice;
use crate::domain::ChatMessage;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ConsultantError {
    /// Submitted text was empty after trimming. The transcript is unchanged.
    #[error("message is empty")]
    EmptyMessage,
}

/// Submit one user message: append it, issue one advice request, append the
/// reply. Returns the assistant message that was appended.
///
/// # Errors
///
/// Returns [`ConsultantError::EmptyMessage`] for whitespace-only input.
pub async fn submit(state: &AppState, text: &str) -> Result<ChatMessage, ConsultantError> {
    let query = text.trim();
    if query.is_empty() {
        return Err(ConsultantError::EmptyMessage);
    }
    info!(query_len = query.len(), "consultant: message received");

    {
        let mut transcript = state.transcript.write().await;
        transcript.messages.push(ChatMessage::user(query));
        transcript.pending = true;
    }

    let snapshot = state.farm_snapshot().await;
    let advice = get_farm_advice(state.advice.as_ref(), &snapshot, query).await;

    let reply = ChatMessage::assistant(advice);
    {
        let mut transcript = state.transcript.write().await;
        transcript.messages.push(reply.clone());
        transcript.pending = false;
    }
    Ok(reply)
}

#[cfg(test)]
#[path = "consultant_test.rs"]
mod tests;
