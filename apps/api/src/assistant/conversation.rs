//! Prompt assembly: combines the CV context, a bounded window of prior turns,
//! and the current question into the user message sent to the LLM.

use serde::{Deserialize, Deserializer, Serialize};

use crate::assistant::prompts::{
    CURRENT_QUESTION_LABEL, CV_CONTEXT_HEADER, RECENT_CONVERSATION_HEADER,
};

/// Number of trailing history entries included (the last 3 user/assistant exchanges).
pub const HISTORY_WINDOW: usize = 6;

/// One message of a prior conversation, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

impl ConversationTurn {
    /// "Assistant" for the assistant role (any case), "User" for everything else.
    pub fn speaker_label(&self) -> &'static str {
        if self.role.eq_ignore_ascii_case("assistant") {
            "Assistant"
        } else {
            "User"
        }
    }
}

/// Returns the trailing `HISTORY_WINDOW` entries of `history`.
pub fn recent_window(history: &[ConversationTurn]) -> &[ConversationTurn] {
    &history[history.len().saturating_sub(HISTORY_WINDOW)..]
}

/// Builds the user message body: context, optional recent conversation, current question.
pub fn build_user_message(context: &str, history: &[ConversationTurn], question: &str) -> String {
    let mut message = format!("{CV_CONTEXT_HEADER}\n{context}\n");

    if !history.is_empty() {
        message.push_str(RECENT_CONVERSATION_HEADER);
        message.push('\n');
        for turn in recent_window(history) {
            let content = turn.content.trim();
            if content.is_empty() {
                continue;
            }
            message.push_str(&format!("{}: {content}\n", turn.speaker_label()));
        }
        message.push('\n');
    }

    message.push_str(&format!("{CURRENT_QUESTION_LABEL} {}", question.trim()));
    message
}
