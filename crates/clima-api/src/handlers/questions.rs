//! Question catalog endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::state::AppState;

/// All questions joined with their answers, citations, and explanations.
pub async fn get_questions(State(state): State<Arc<AppState>>) -> Response {
    let data = state.questions.all().await;
    info!(count = data.len(), "Retrieved questions with answers");

    Json(json!({
        "success": true,
        "count": data.len(),
        "data": data,
    }))
    .into_response()
}

pub async fn get_question_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.questions.get(&id).await {
        Some(question) => {
            info!(question_id = %id, "Retrieved question");
            Json(json!({ "success": true, "data": question })).into_response()
        }
        None => {
            warn!(question_id = %id, "Question not found");
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "success": false,
                    "error": "Question not found",
                    "message": format!("No question found with ID: {}", id),
                })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Append a user-submitted question to the in-memory catalog.
pub async fn submit_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SubmitQuestionRequest>,
) -> Response {
    let question = match body.question {
        Some(q) if !q.trim().is_empty() => q,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "error": "Validation error",
                    "message": "Question is required and must be a non-empty string",
                })),
            )
                .into_response();
        }
    };

    let submitted = state.questions.submit(question, body.explanation).await;
    info!(question_id = %submitted.id, "New question submitted");

    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Question submitted successfully",
            "data": {
                "id": submitted.id,
                "question": submitted.question,
                "explanation": submitted.help_text,
                "submittedAt": chrono::Utc::now().to_rfc3339(),
            },
        })),
    )
        .into_response()
}
