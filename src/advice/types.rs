//! Advice types — error taxonomy and the provider-neutral trait.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced inside the advice flow. These never escape the advice
/// boundary: callers see either generated text or the fixed fallback string.
/// The variants exist for logging.
#[derive(Debug, thiserror::Error)]
pub enum AdviceError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the advice endpoint failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The advice endpoint returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The advice endpoint response body could not be interpreted.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// FARM ADVICE TRAIT
// =============================================================================

/// Provider-neutral async trait for the generated-advice call. Enables
/// mocking in tests.
#[async_trait::async_trait]
pub trait FarmAdvice: Send + Sync {
    /// Send one composed prompt to the advice endpoint and return the
    /// generated text.
    ///
    /// # Errors
    ///
    /// Returns an [`AdviceError`] if the request fails, the response is
    /// malformed, or no text was generated.
    async fn generate(&self, prompt: &str) -> Result<String, AdviceError>;
}
