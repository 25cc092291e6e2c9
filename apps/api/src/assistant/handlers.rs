//! Axum route handlers for the Ask API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::conversation::ConversationTurn;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// A missing question is rejected by the same validation as a blank one.
    #[serde(default)]
    pub question: String,
    /// Prior turns, oldest first. Only the most recent ones are used.
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// POST /api/v1/ask
///
/// Answers a question about the loaded CV. Pass the previous turns in `history`
/// to support follow-ups like "tell me more about that project".
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let answer = state
        .assistant
        .answer(&request.question, &state.cv, &request.history)
        .await?;

    Ok(Json(AskResponse { answer }))
}
