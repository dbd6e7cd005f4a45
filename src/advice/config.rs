//! Advice configuration parsed from environment variables.

use super::types::AdviceError;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ADVICE_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ADVICE_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ADVICE_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeouts: AdviceTimeouts,
}

impl AdviceConfig {
    /// Build typed advice config from environment variables.
    ///
    /// Required:
    /// - `GEMINI_API_KEY`
    ///
    /// Optional:
    /// - `ADVICE_MODEL`: default `gemini-3-flash-preview`
    /// - `ADVICE_BASE_URL`: default Gemini API base URL
    /// - `ADVICE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `ADVICE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`AdviceError::MissingApiKey`] when `GEMINI_API_KEY` is unset,
    /// or [`AdviceError::ConfigParse`] when a timeout override is not a
    /// whole number of seconds.
    pub fn from_env() -> Result<Self, AdviceError> {
        let api_key =
            std::env::var("GEMINI_API_KEY").map_err(|_| AdviceError::MissingApiKey { var: "GEMINI_API_KEY".into() })?;
        let model = std::env::var("ADVICE_MODEL").unwrap_or_else(|_| DEFAULT_ADVICE_MODEL.to_string());
        let base_url = std::env::var("ADVICE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = AdviceTimeouts {
            request_secs: env_parse_u64("ADVICE_REQUEST_TIMEOUT_SECS", DEFAULT_ADVICE_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse_u64("ADVICE_CONNECT_TIMEOUT_SECS", DEFAULT_ADVICE_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { api_key, model, base_url, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> Result<u64, AdviceError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|_| AdviceError::ConfigParse(format!("{key} must be a whole number of seconds, got {raw:?}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
