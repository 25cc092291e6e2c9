use axum::{extract::State, Json};
use serde::Serialize;

use crate::cv::context::build_context;
use crate::models::cv::CvData;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContextResponse {
    pub context: String,
}

/// GET /api/v1/cv
pub async fn handle_get_cv(State(state): State<AppState>) -> Json<CvData> {
    Json(state.cv.as_ref().clone())
}

/// GET /api/v1/cv/context
/// Returns the exact context block the assistant answers from.
pub async fn handle_get_context(State(state): State<AppState>) -> Json<ContextResponse> {
    Json(ContextResponse {
        context: build_context(&state.cv),
    })
}
