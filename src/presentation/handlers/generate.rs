use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::{GenerationError, segment_response};
use crate::infrastructure::observability::{RequestId, sanitize_prompt};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub content: String,
    pub ai_mode: String,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub response: String,
    pub segments: Vec<String>,
    pub search_used: bool,
    pub has_attributable_links: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            message: message.into(),
        }
    }
}

#[tracing::instrument(skip_all, fields(ai_mode = tracing::field::Empty))]
pub async fn generate_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Malformed generation request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("invalid_input", rejection.body_text())),
            )
                .into_response();
        }
    };
    tracing::Span::current().record("ai_mode", request.ai_mode.as_str());

    let input = sanitize_prompt(&request.content);
    tracing::debug!(input = %input, "Processing document");

    if request.content.trim().is_empty() {
        tracing::warn!("Generation request with empty content");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("invalid_input", "content must not be empty")),
        )
            .into_response();
    }

    match state
        .generation_service
        .process(&request.content, &request.ai_mode)
        .await
    {
        Ok(result) => {
            let segments = segment_response(&result.text, state.max_segment_length());
            tracing::info!(
                segments = segments.len(),
                search_used = result.search_used,
                has_attributable_links = result.has_attributable_links,
                "Generation successful"
            );
            (
                StatusCode::OK,
                Json(GenerateResponse {
                    success: true,
                    response: result.text,
                    segments,
                    search_used: result.search_used,
                    has_attributable_links: result.has_attributable_links,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                request_id = %request_id.0,
                input = %input,
                "Generation failed"
            );
            error_response(&e)
        }
    }
}

fn error_response(error: &GenerationError) -> Response {
    let (status, body) = match error {
        GenerationError::InvalidMode(e) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("invalid_input", e.to_string()),
        ),
        GenerationError::ConfigurationMissing => (
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorResponse::new("api_key_missing", "Gemini API key is not configured"),
        ),
        GenerationError::Timeout(_) => (
            StatusCode::GATEWAY_TIMEOUT,
            ErrorResponse::new("timeout", "Timed out waiting for Gemini API"),
        ),
        GenerationError::EmptyResponse | GenerationError::Provider(_) => (
            StatusCode::BAD_GATEWAY,
            ErrorResponse::new("api_error", "Failed to generate response from Gemini API"),
        ),
    };

    (status, Json(body)).into_response()
}
