//! Integration tests for `POST /api/train-txt`.
//!
//! Run with: cargo test -p chat-service --test train_api

mod common;

use chat_service::services::InstructionStore;
use common::{chat_reply, spawn_app, upload_instruction};

#[tokio::test]
async fn uploaded_instruction_seeds_the_chat_prompt() {
    let app = spawn_app().await;

    let response = upload_instruction(&app, "Answer like a pirate.").await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Bot trained successfully!");

    let reply = chat_reply(&app, "ahoy").await;
    assert!(
        reply.starts_with("Mock response for: Answer like a pirate.\nConversation so far:"),
        "prompt did not start with the uploaded instruction: {}",
        reply
    );
}

#[tokio::test]
async fn reingesting_replaces_the_stored_instruction() {
    let app = spawn_app().await;

    upload_instruction(&app, "instruction A").await;
    upload_instruction(&app, "instruction B").await;

    let stored = app.store.get().await.expect("Failed to read store");
    assert_eq!(stored.as_deref(), Some("instruction B"));
}

#[tokio::test]
async fn missing_file_is_rejected_without_a_write() {
    let app = spawn_app().await;

    // Multipart body with no fields at all
    let form = reqwest::multipart::Form::new();
    let response = app
        .client
        .post(format!("{}/api/train-txt", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send upload request");

    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body.get("error").is_some());

    let stored = app.store.get().await.expect("Failed to read store");
    assert_eq!(stored, None);
}
