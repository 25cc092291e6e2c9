pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as ask;
use crate::cv::handlers as cv;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // CV API
        .route("/api/v1/cv", get(cv::handle_get_cv))
        .route("/api/v1/cv/context", get(cv::handle_get_context))
        // Ask API
        .route("/api/v1/ask", post(ask::handle_ask))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::assistant::service::CvAssistant;
    use crate::llm_client::{ChatCompletion, ChatRequest, ChatResponse, Choice, LlmError, ResponseMessage};
    use crate::models::cv::CvData;

    /// Echoes the user message back so tests can see what was sent.
    struct EchoLlm;

    #[async_trait]
    impl ChatCompletion for EchoLlm {
        async fn complete(&self, _api_key: &str, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
            Ok(ChatResponse {
                choices: vec![Choice {
                    message: Some(ResponseMessage {
                        content: Some(request.user.clone()),
                    }),
                }],
                usage: None,
            })
        }
    }

    fn app(api_key: Option<&str>, cv: Value) -> Router {
        let cv: CvData = serde_json::from_value(cv).unwrap();
        build_router(AppState {
            cv: Arc::new(cv),
            assistant: CvAssistant::new(api_key.map(str::to_string), Arc::new(EchoLlm)),
        })
    }

    fn sample_cv() -> Value {
        json!({"profile": {"name": "Ada", "jobTitle": "Engineer"}})
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ask(body: Value) -> Request<Body> {
        Request::post("/api/v1/ask")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(
            app(None, json!({})),
            Request::get("/health").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "cv-assistant-api");
    }

    #[tokio::test]
    async fn test_get_context() {
        let (status, body) = send(
            app(None, sample_cv()),
            Request::get("/api/v1/cv/context").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["context"], "## Profile\nName: Ada\nJob title: Engineer");
    }

    #[tokio::test]
    async fn test_get_cv_round_trips_field_names() {
        let (status, body) = send(
            app(None, sample_cv()),
            Request::get("/api/v1/cv").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["jobTitle"], "Engineer");
    }

    #[tokio::test]
    async fn test_ask_returns_answer() {
        let (status, body) = send(
            app(Some("key"), sample_cv()),
            ask(json!({
                "question": "What does she do?",
                "history": [{"role": "user", "content": "Hi"}]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let answer = body["answer"].as_str().unwrap();
        assert!(answer.contains("User: Hi"));
        assert!(answer.ends_with("Current question: What does she do?"));
    }

    #[tokio::test]
    async fn test_ask_blank_question_is_rejected() {
        let (status, body) = send(app(Some("key"), sample_cv()), ask(json!({"question": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_ask_missing_question_is_validation_error() {
        let (status, body) = send(app(Some("key"), sample_cv()), ask(json!({"history": []}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_ask_accepts_null_history_fields() {
        let (status, body) = send(
            app(Some("key"), sample_cv()),
            ask(json!({
                "question": "And then?",
                "history": [{"role": null, "content": "Hi"}, {"role": "assistant", "content": null}]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["answer"].as_str().unwrap().contains("User: Hi"));
    }

    #[tokio::test]
    async fn test_ask_without_credential_is_configuration_error() {
        let (status, body) = send(app(None, sample_cv()), ask(json!({"question": "Who?"}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
        assert_eq!(body["error"]["message"], "GROQ_API_KEY is not set");
    }

    #[tokio::test]
    async fn test_ask_with_empty_cv_returns_fallback() {
        let (status, body) = send(app(Some("key"), json!({})), ask(json!({"question": "Who?"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["answer"], "No CV data available to answer from.");
    }
}
