use std::sync::Arc;

use crate::assistant::service::CvAssistant;
use crate::models::cv::CvData;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// CV data loaded once at startup; read-only for the life of the process.
    pub cv: Arc<CvData>,
    pub assistant: CvAssistant,
}
