//! LLM Client: the single point of entry for all text-generation calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All LLM interactions MUST go through `TextGateway`, so every caller can be
//! exercised against a fake in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Proxy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::GeminiConfig;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl From<reqwest::Error> for LlmError {
    /// Drops the request URL so a transport error is safe to log.
    fn from(error: reqwest::Error) -> Self {
        LlmError::Http(error.without_url())
    }
}

/// Upper bound on attempts per call, whatever `MAX_RETRIES` says.
pub const MAX_ATTEMPTS: u32 = 5;
const MAX_BACKOFF: Duration = Duration::from_secs(8);

/// Delay before retry number `attempt` (1-based): 1s, 2s, 4s, then capped.
fn backoff_delay(attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    Duration::from_millis(1000 << exponent).min(MAX_BACKOFF)
}

/// Sampling knobs for one completion.
#[derive(Debug, Clone, Copy)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Prompt in, raw text out. Fails on transport errors, timeouts, non-2xx
/// replies and empty output; callers own every fallback.
#[async_trait]
pub trait TextGateway: Send + Sync {
    async fn complete(&self, prompt: &str, options: CompletionOptions) -> Result<String, LlmError>;

    /// Model identifier, reported on the readiness probe.
    fn model(&self) -> &str;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiChunk {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiChunk {
    /// Text of the first part of the first candidate, if any.
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Gemini `streamGenerateContent` client.
/// Each call is an independent request on a pooled `reqwest::Client`; no lock
/// is held across calls, so concurrent requests never wait on each other.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    max_retries: u32,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, LlmError> {
        let mut builder = Client::builder().timeout(config.timeout);
        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries.clamp(1, MAX_ATTEMPTS),
        })
    }

    /// The key travels in the `x-goog-api-key` header, never in the URL.
    fn endpoint(&self) -> String {
        format!("{}/{}:streamGenerateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGateway for GeminiClient {
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    /// Transport errors (including timeouts) fail immediately.
    async fn complete(&self, prompt: &str, options: CompletionOptions) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_tokens,
            },
        };
        let url = self.endpoint();

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..self.max_retries {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                warn!(
                    "Gemini call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&request_body)
                .send()
                .await?;
            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Gemini API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<GeminiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let payload: Value = response.json().await?;
            let text = collect_stream_text(payload)?;

            debug!(model = %self.model, chars = text.len(), "Gemini call succeeded");
            return Ok(text);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: self.max_retries,
        }))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Concatenates the text of a streamed reply. The endpoint answers with either
/// a JSON array of chunks or a single chunk object.
fn collect_stream_text(payload: Value) -> Result<String, LlmError> {
    let chunks: Vec<GeminiChunk> = match payload {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };

    let text: String = chunks.iter().filter_map(GeminiChunk::text).collect();
    let text = text.trim();

    if text.is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(text.to_string())
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_collect_stream_text_joins_chunks() {
        let payload = json!([
            {"candidates": [{"content": {"parts": [{"text": "{\"profession\":"}]}}]},
            {"candidates": [{"content": {"parts": [{"text": "\"developer\"}"}]}}]},
            {"usageMetadata": {"totalTokenCount": 12}}
        ]);
        let text = collect_stream_text(payload).unwrap();
        assert_eq!(text, "{\"profession\":\"developer\"}");
    }

    #[test]
    fn test_collect_stream_text_single_object() {
        let payload = json!({"candidates": [{"content": {"parts": [{"text": "  hello  "}]}}]});
        assert_eq!(collect_stream_text(payload).unwrap(), "hello");
    }

    #[test]
    fn test_collect_stream_text_empty_is_error() {
        let payload = json!([{"candidates": []}]);
        assert!(matches!(
            collect_stream_text(payload),
            Err(LlmError::EmptyContent)
        ));
    }

    fn test_config(api_key: &str, base_url: &str, max_retries: u32) -> GeminiConfig {
        GeminiConfig {
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            max_retries,
            ..Config::default().gemini
        }
    }

    #[test]
    fn test_endpoint_carries_no_key() {
        let config = test_config("SECRET-KEY-123", "http://localhost/v1beta/models/", 3);
        let client = GeminiClient::new(&config).unwrap();
        let url = client.endpoint();
        assert!(!url.contains("SECRET-KEY-123"));
        assert!(!url.contains("key="));
        assert!(url.ends_with("/models/gemini-2.5-flash:streamGenerateContent"));
    }

    #[tokio::test]
    async fn test_transport_error_does_not_leak_key() {
        let key = "SECRET-KEY-123";
        let client = GeminiClient::new(&test_config(key, "http://127.0.0.1:9", 1)).unwrap();

        let err = client.complete("hello", prompts::EXTRACTION).await.unwrap_err();
        let shown = format!("{err} {err:?}");
        assert!(!shown.contains(key), "key leaked: {shown}");
    }

    #[test]
    fn test_retries_are_clamped() {
        let many = GeminiClient::new(&test_config("k", "http://localhost", 500)).unwrap();
        assert_eq!(many.max_retries, MAX_ATTEMPTS);
        let none = GeminiClient::new(&test_config("k", "http://localhost", 0)).unwrap();
        assert_eq!(none.max_retries, 1);
    }

    #[test]
    fn test_backoff_doubles_then_caps() {
        assert_eq!(backoff_delay(1), Duration::from_secs(1));
        assert_eq!(backoff_delay(2), Duration::from_secs(2));
        assert_eq!(backoff_delay(3), Duration::from_secs(4));
        assert_eq!(backoff_delay(5), MAX_BACKOFF);
        assert_eq!(backoff_delay(70), MAX_BACKOFF);
    }

    #[test]
    fn test_request_body_uses_gemini_field_names() {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: "hi" }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                max_output_tokens: 256,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 256);
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
    }
}
