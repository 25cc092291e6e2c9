//! LLM Client: the single point of entry for all chat completion calls.
//!
//! ARCHITECTURAL RULE: No other module may call the provider API directly.
//! All LLM interactions MUST go through the `ChatCompletion` seam.
//!
//! Model, token cap and temperature are hardcoded. Do not make them configurable.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for every CV question.
pub const MODEL: &str = "llama-3.1-8b-instant";
pub const MAX_TOKENS: u32 = 1024;
/// Low temperature keeps answers factual and repeatable.
pub const TEMPERATURE: f32 = 0.3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single chat completion request: one system message, one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: &'static str,
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: [WireMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl<'a> From<&'a ChatRequest> for CompletionBody<'a> {
    fn from(request: &'a ChatRequest) -> Self {
        Self {
            model: request.model,
            messages: [
                WireMessage {
                    role: "system",
                    content: &request.system,
                },
                WireMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Text content of the first choice, if the provider returned any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Chat completion collaborator. The credential is passed per call so callers own it.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<ChatResponse, LlmError>;
}

/// Chat completion client for the Groq OpenAI-compatible endpoint.
/// One request per call: no retries, the HTTP client timeout is the only deadline.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
}

impl LlmClient {
    pub fn new() -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
        })
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let body = CompletionBody::from(request);

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: provider_error_message(text),
            });
        }

        let completion: ChatResponse = serde_json::from_str(&text)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

/// Pulls `error.message` out of a provider error body, falling back to the raw body.
fn provider_error_message(body: String) -> String {
    serde_json::from_str::<ProviderError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ChatRequest {
        ChatRequest {
            model: MODEL,
            system: "sys".to_string(),
            user: "question".to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    #[test]
    fn test_completion_body_shape() {
        let req = request();
        let json = serde_json::to_value(CompletionBody::from(&req)).unwrap();

        assert_eq!(json["model"], "llama-3.1-8b-instant");
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "sys");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "question");
        assert!((json["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_first_content_from_response() {
        let json = r#"{
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Hello"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_content(), Some("Hello"));
        assert_eq!(response.usage.unwrap().completion_tokens, 2);
    }

    #[test]
    fn test_first_content_absent_cases() {
        let no_choices: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(no_choices.first_content(), None);

        let no_message: ChatResponse = serde_json::from_str(r#"{"choices": [{}]}"#).unwrap();
        assert_eq!(no_message.first_content(), None);

        let null_content: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert_eq!(null_content.first_content(), None);
    }

    #[test]
    fn test_provider_error_message_parsed() {
        let body = r#"{"error": {"message": "Invalid API Key", "type": "invalid_request_error"}}"#;
        assert_eq!(provider_error_message(body.to_string()), "Invalid API Key");
    }

    #[test]
    fn test_provider_error_message_falls_back_to_body() {
        assert_eq!(provider_error_message("Bad Gateway".to_string()), "Bad Gateway");
    }

    #[test]
    fn test_partial_usage_does_not_fail_parsing() {
        let json = r#"{"choices": [{"message": {"content": "Hi"}}], "usage": {"total_tokens": 5}}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_content(), Some("Hi"));
        assert_eq!(response.usage.unwrap().prompt_tokens, 0);
    }
}
