use crate::models::{ChatReply, ChatRequest};
use crate::services::prompt::{self, DEFAULT_INSTRUCTION, NO_REPLY_SENTINEL};
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;
use validator::Validate;

/// `POST /api/chat`: answer a user message from the stored instruction and
/// caller-supplied history via the generation API, or from the hardcoded age
/// rule when it matches.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    // Hardcoded rule, answered without touching storage or the API.
    if prompt::is_age_question(&request.user_message) {
        return Ok(Json(ChatReply {
            reply: prompt::age_reply(),
        }));
    }

    let instruction = state
        .store
        .get()
        .await?
        .unwrap_or_else(|| DEFAULT_INSTRUCTION.to_string());

    let full_prompt = prompt::compose(&instruction, &request.conversation, &request.user_message);

    let response = state
        .text_provider
        .generate(&full_prompt)
        .await
        .map_err(|e| AppError::UpstreamError(e.to_string()))?;

    let reply = response
        .text
        .unwrap_or_else(|| NO_REPLY_SENTINEL.to_string());

    tracing::info!(reply_len = reply.len(), "Chat reply produced");

    Ok(Json(ChatReply { reply }))
}
