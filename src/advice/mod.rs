//! Advice — the consultant's outbound request flow.
//!
//! DESIGN
//! ======
//! One logical operation: `get_farm_advice(snapshot, query) -> text`. The
//! farm-context snapshot is serialized verbatim into a fixed instruction
//! template, sent to the Gemini `generateContent` endpoint in a single call,
//! and any failure whatsoever collapses to [`FALLBACK_TEXT`]. Callers never
//! see an error; there is no retry, caching, or deduplication.

pub mod config;
pub mod gemini;
pub mod types;

use std::sync::Arc;

use tracing::warn;

use crate::domain::FarmSnapshot;
use config::AdviceConfig;
pub use types::{AdviceError, FarmAdvice};

/// Canned reply used whenever advice cannot be generated, verbatim.
pub const FALLBACK_TEXT: &str = "I'm having trouble analyzing the farm data right now. Please try again later.";

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete advice client backed by the Gemini API.
///
/// Configured from environment variables by [`AdviceClient::from_env`].
pub struct AdviceClient {
    inner: gemini::GeminiClient,
    model: String,
}

impl AdviceClient {
    /// Build an advice client from environment variables (`GEMINI_API_KEY`,
    /// optional `ADVICE_MODEL` / `ADVICE_BASE_URL` / timeout overrides).
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, AdviceError> {
        let config = AdviceConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an advice client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: AdviceConfig) -> Result<Self, AdviceError> {
        let inner = gemini::GeminiClient::new(config.api_key, config.base_url, config.timeouts)?;
        Ok(Self { inner, model: config.model })
    }

    /// Return the configured model name (e.g. `"gemini-3-flash-preview"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl FarmAdvice for AdviceClient {
    async fn generate(&self, prompt: &str) -> Result<String, AdviceError> {
        self.inner.generate(&self.model, prompt).await
    }
}

// =============================================================================
// PROMPT + FALLBACK ABSORPTION
// =============================================================================

/// Compose the consultant prompt: role framing, the serialized snapshot, and
/// the literal user query.
#[must_use]
pub fn build_prompt(snapshot: &FarmSnapshot, query: &str) -> String {
    let context = serde_json::to_string(snapshot).unwrap_or_else(|_| "{}".to_string());
    format!(
        "You are an expert agricultural consultant specializing in poultry and catfish farming.\n\n\
         Farm Context: {context}\n\n\
         User Query: {query}\n\n\
         Provide actionable, data-driven advice. Keep it concise and professional."
    )
}

/// The advice-request function: build the prompt, issue one call, absorb any
/// failure into [`FALLBACK_TEXT`]. Always returns a displayable string.
pub async fn get_farm_advice(
    client: Option<&Arc<dyn FarmAdvice>>,
    snapshot: &FarmSnapshot,
    query: &str,
) -> String {
    let Some(client) = client else {
        warn!("advice client not configured, returning fallback");
        return FALLBACK_TEXT.to_string();
    };

    let prompt = build_prompt(snapshot, query);
    match client.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "advice request failed, returning fallback");
            FALLBACK_TEXT.to_string()
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
