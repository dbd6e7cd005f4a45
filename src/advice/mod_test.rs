use super::*;

fn snapshot() -> FarmSnapshot {
    FarmSnapshot {
        name: "Green Valley Farm".into(),
        poultry_count: 6900,
        pond_count: 2,
        avg_mortality: "1.2%".into(),
        feed_stock: "4,500kg".into(),
    }
}

// =========================================================================
// Mock providers
// =========================================================================

struct FixedAdvice(&'static str);

#[async_trait::async_trait]
impl FarmAdvice for FixedAdvice {
    async fn generate(&self, _prompt: &str) -> Result<String, AdviceError> {
        Ok(self.0.to_string())
    }
}

struct FailingAdvice;

#[async_trait::async_trait]
impl FarmAdvice for FailingAdvice {
    async fn generate(&self, _prompt: &str) -> Result<String, AdviceError> {
        Err(AdviceError::ApiResponse { status: 503, body: "overloaded".into() })
    }
}

/// Captures the prompt it was handed.
struct RecordingAdvice(std::sync::Mutex<Option<String>>);

#[async_trait::async_trait]
impl FarmAdvice for RecordingAdvice {
    async fn generate(&self, prompt: &str) -> Result<String, AdviceError> {
        *self.0.lock().unwrap() = Some(prompt.to_string());
        Ok("ok".into())
    }
}

// =========================================================================
// build_prompt
// =========================================================================

#[test]
fn prompt_contains_role_context_and_query() {
    let prompt = build_prompt(&snapshot(), "Why is egg yield down?");
    assert!(prompt.starts_with("You are an expert agricultural consultant"));
    assert!(prompt.contains("Green Valley Farm"));
    assert!(prompt.contains("\"poultry_count\":6900"));
    assert!(prompt.contains("User Query: Why is egg yield down?"));
    assert!(prompt.contains("concise and professional"));
}

#[test]
fn prompt_passes_query_through_literally() {
    let prompt = build_prompt(&snapshot(), "  odd \"quoted\" input  ");
    assert!(prompt.contains("User Query:   odd \"quoted\" input  "));
}

// =========================================================================
// get_farm_advice
// =========================================================================

#[tokio::test]
async fn advice_returns_generated_text() {
    let client: Arc<dyn FarmAdvice> = Arc::new(FixedAdvice("Rotate your ponds weekly."));
    let text = get_farm_advice(Some(&client), &snapshot(), "pond rotation?").await;
    assert_eq!(text, "Rotate your ponds weekly.");
}

#[tokio::test]
async fn advice_failure_returns_exact_fallback() {
    let client: Arc<dyn FarmAdvice> = Arc::new(FailingAdvice);
    let text = get_farm_advice(Some(&client), &snapshot(), "anything").await;
    assert_eq!(text, FALLBACK_TEXT);
}

#[tokio::test]
async fn advice_unconfigured_returns_exact_fallback() {
    let text = get_farm_advice(None, &snapshot(), "anything").await;
    assert_eq!(text, FALLBACK_TEXT);
}

#[tokio::test]
async fn advice_sends_composed_prompt() {
    let recorder = Arc::new(RecordingAdvice(std::sync::Mutex::new(None)));
    let client: Arc<dyn FarmAdvice> = recorder.clone();
    let _ = get_farm_advice(Some(&client), &snapshot(), "feed ratio?").await;

    let sent = recorder.0.lock().unwrap().take().unwrap();
    assert!(sent.contains("Farm Context:"));
    assert!(sent.contains("feed ratio?"));
}
