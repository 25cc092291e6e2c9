//! CV assistant: answers a question about the CV with one LLM call.
//!
//! Flow: credential check → build context → assemble prompt → chat completion →
//! normalize reply. Nothing is cached between calls.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::assistant::conversation::{build_user_message, recent_window, ConversationTurn};
use crate::assistant::normalize::collapse_skill_lines;
use crate::assistant::prompts::{ask_system_prompt, NO_CV_DATA_ANSWER};
use crate::cv::context::build_context;
use crate::llm_client::{ChatCompletion, ChatRequest, LlmError, MAX_TOKENS, MODEL, TEMPERATURE};
use crate::models::cv::CvData;

/// Environment key the credential is loaded from at startup.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, Error)]
pub enum AskError {
    #[error("{0} is not set")]
    Configuration(&'static str),

    #[error("Empty response from LLM")]
    EmptyResponse,

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Answers CV questions. The credential is injected at construction and checked per call.
#[derive(Clone)]
pub struct CvAssistant {
    api_key: Option<String>,
    llm: Arc<dyn ChatCompletion>,
}

impl CvAssistant {
    pub fn new(api_key: Option<String>, llm: Arc<dyn ChatCompletion>) -> Self {
        Self { api_key, llm }
    }

    /// Answers `question` from `data`, using up to the last 6 `history` turns for follow-ups.
    ///
    /// Fails with `AskError::Configuration` before any network call when the credential is
    /// missing or blank. Returns `NO_CV_DATA_ANSWER` without calling the LLM when `data`
    /// produces no context.
    pub async fn answer(
        &self,
        question: &str,
        data: &CvData,
        history: &[ConversationTurn],
    ) -> Result<String, AskError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(AskError::Configuration(API_KEY_VAR))?;

        let context = build_context(data);
        if context.is_empty() {
            info!("No CV context available, returning fallback answer");
            return Ok(NO_CV_DATA_ANSWER.to_string());
        }

        let candidate = data.profile.as_ref().and_then(|p| p.name.as_deref());
        let request = ChatRequest {
            model: MODEL,
            system: ask_system_prompt(candidate),
            user: build_user_message(&context, history, question),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        debug!(
            "Asking LLM: context_chars={}, history_turns={}",
            context.len(),
            recent_window(history).len()
        );

        let response = self.llm.complete(api_key, &request).await?;

        let Some(raw) = response.first_content() else {
            warn!("LLM returned no choices or no message content");
            return Err(AskError::EmptyResponse);
        };

        let answer = collapse_skill_lines(raw.trim());
        info!("Answered CV question ({} chars)", answer.len());
        Ok(answer)
    }
}
