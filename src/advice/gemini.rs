//! Gemini `generateContent` API client.
//!
//! One endpoint, one request shape: a single-part text prompt with the
//! thinking budget pinned to zero to bias the model toward quick, low-
//! elaboration conversational replies.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::config::AdviceTimeouts;
use super::types::AdviceError;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Build the client with request/connect timeouts applied.
    ///
    /// # Errors
    ///
    /// Returns [`AdviceError::HttpClientBuild`] if the reqwest client fails
    /// to construct.
    pub fn new(api_key: String, base_url: String, timeouts: AdviceTimeouts) -> Result<Self, AdviceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| AdviceError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    /// Issue one `generateContent` call and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an [`AdviceError`] on transport failure, non-200 status, or a
    /// body with no usable text.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String, AdviceError> {
        let body = GenerateRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }],
            generation_config: GenerationConfig { thinking_config: ThinkingConfig { thinking_budget: 0 } },
        };
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AdviceError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AdviceError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(AdviceError::ApiResponse { status, body: text });
        }
        parse_generate_response(&text)
    }
}

// =============================================================================
// REQUEST — wire types
// =============================================================================

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "thinkingConfig")]
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
struct ThinkingConfig {
    #[serde(rename = "thinkingBudget")]
    thinking_budget: u32,
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

/// Extract the generated text from a `generateContent` response body:
/// the concatenated `text` parts of the first candidate.
pub(crate) fn parse_generate_response(json_text: &str) -> Result<String, AdviceError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| AdviceError::ApiParse(e.to_string()))?;

    let Some(candidate) = root
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
    else {
        return Err(AdviceError::ApiParse("generateContent: missing candidates[0]".to_string()));
    };

    let mut out = String::new();
    if let Some(parts) = candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(Value::as_array)
    {
        for part in parts {
            if let Some(text) = part.get("text").and_then(Value::as_str) {
                out.push_str(text);
            }
        }
    }

    if out.is_empty() {
        return Err(AdviceError::ApiParse("generateContent: candidate has no text parts".to_string()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_text_response() {
        let json = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Increase aeration in Pond A." }], "role": "model" },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 9 }
        })
        .to_string();
        let text = parse_generate_response(&json).unwrap();
        assert_eq!(text, "Increase aeration in Pond A.");
    }

    #[test]
    fn parse_concatenates_parts() {
        let json = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Feed twice daily. " }, { "text": "Monitor pH." }] }
            }]
        })
        .to_string();
        let text = parse_generate_response(&json).unwrap();
        assert_eq!(text, "Feed twice daily. Monitor pH.");
    }

    #[test]
    fn parse_missing_candidates_errors() {
        let json = serde_json::json!({ "candidates": [] }).to_string();
        assert!(parse_generate_response(&json).is_err());
    }

    #[test]
    fn parse_candidate_without_text_errors() {
        let json = serde_json::json!({
            "candidates": [{ "content": { "parts": [] }, "finishReason": "SAFETY" }]
        })
        .to_string();
        let err = parse_generate_response(&json).unwrap_err().to_string();
        assert!(err.contains("no text parts"));
    }

    #[test]
    fn parse_invalid_json_errors() {
        assert!(parse_generate_response("not json").is_err());
    }

    #[test]
    fn request_body_pins_thinking_budget_to_zero() {
        let body = GenerateRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: "hello" }] }],
            generation_config: GenerationConfig { thinking_config: ThinkingConfig { thinking_budget: 0 } },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["thinkingConfig"]["thinkingBudget"], 0);
    }
}
