//! Integration tests for `POST /api/chat`.
//!
//! The mock provider echoes the composed prompt, so these tests can assert
//! prompt composition through the HTTP surface.
//!
//! Run with: cargo test -p chat-service --test chat_api

mod common;

use chat_service::services::providers::mock::MockTextProvider;
use chrono::Datelike;
use common::{chat_reply, spawn_app, spawn_app_with_provider};
use std::sync::Arc;

#[tokio::test]
async fn age_question_is_answered_by_the_hardcoded_rule() {
    let app = spawn_app().await;

    let reply = chat_reply(&app, "Hey, what is Hassnain's AGE?").await;

    let today = chrono::Utc::now().date_naive();
    let mut expected_age = today.year() - 2002;
    if today.month() < 6 {
        expected_age -= 1;
    }
    assert_eq!(
        reply,
        format!(
            "{} years old in {} (born June 2002)",
            expected_age,
            today.year()
        )
    );
}

#[tokio::test]
async fn chat_uses_the_default_instruction_when_nothing_is_ingested() {
    let app = spawn_app().await;

    let reply = chat_reply(&app, "hello").await;

    assert_eq!(
        reply,
        "Mock response for: You are a helpful AI assistant.\nConversation so far:\n\nUser: hello\nAssistant:"
    );
}

#[tokio::test]
async fn conversation_history_is_rendered_in_order_before_the_new_message() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(format!("{}/api/chat", app.address))
        .json(&serde_json::json!({
            "userMessage": "what next?",
            "conversation": [
                { "role": "user", "content": "hi" },
                { "role": "assistant", "content": "hello" }
            ]
        }))
        .send()
        .await
        .expect("Failed to send chat request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");

    assert_eq!(
        body["reply"],
        "Mock response for: You are a helpful AI assistant.\nConversation so far:\nuser: hi\nassistant: hello\nUser: what next?\nAssistant:"
    );
}

#[tokio::test]
async fn empty_candidates_produce_the_no_reply_sentinel() {
    let app = spawn_app_with_provider(Arc::new(MockTextProvider::empty())).await;

    let reply = chat_reply(&app, "hello").await;

    assert_eq!(reply, "No reply from AI");
}

#[tokio::test]
async fn empty_user_message_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(format!("{}/api/chat", app.address))
        .json(&serde_json::json!({ "userMessage": "" }))
        .send()
        .await
        .expect("Failed to send chat request");

    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body.get("error").is_some());
}
