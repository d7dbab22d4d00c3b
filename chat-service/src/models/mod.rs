//! Wire and storage models for the relay.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// The single persisted instruction record, discriminated by `type` in the
/// `settings` collection. At most one document carries the instruction type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instruction {
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
}

/// One (role, content) pair of caller-supplied chat history. Never persisted;
/// the caller accumulates and resends history on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "userMessage must not be empty"))]
    pub user_message: String,
    #[serde(default)]
    pub conversation: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub message: String,
}
