use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use goalchat_core::models::chat::ChatMessage;
use goalchat_llm::chat::respond;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct LlmRequest {
    pub history: Vec<ChatMessage>,
}

/// Forward the full history to the completion backend and return it with
/// the assistant's reply appended.
pub async fn complete(
    State(state): State<AppState>,
    payload: Result<Json<LlmRequest>, JsonRejection>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let Json(req) = payload?;

    if req.history.is_empty() {
        return Err(ApiError::BadRequest("history must not be empty".to_string()));
    }

    let history = respond(state.completion.as_ref(), req.history).await?;
    Ok(Json(history))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
