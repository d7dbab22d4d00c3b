use crate::models::TrainResponse;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

/// `POST /api/train-txt`: ingest an uploaded text file as the bot
/// instruction. The write is a keyed replace: any previously stored
/// instruction is overwritten.
pub async fn train_txt(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
        })?
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("File missing")))?;

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e)))?;

    // Lossy decode: invalid UTF-8 becomes replacement characters
    let extracted_text = String::from_utf8_lossy(&data).into_owned();

    state.store.put(&extracted_text).await?;

    tracing::info!(bytes = extracted_text.len(), "Bot instruction saved");

    Ok(Json(TrainResponse {
        message: "Bot trained successfully!".to_string(),
    }))
}
