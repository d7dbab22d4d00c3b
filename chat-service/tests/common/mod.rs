//! Shared test harness: spawns the service on a random port with the
//! in-memory store and a mock provider, and drives it over HTTP.

#![allow(dead_code)]

use chat_service::services::providers::mock::MockTextProvider;
use chat_service::services::providers::TextProvider;
use chat_service::services::MemoryInstructionStore;
use chat_service::startup::{AppState, Application};
use std::sync::Arc;
use std::time::Duration;

pub struct TestApp {
    pub address: String,
    pub store: Arc<MemoryInstructionStore>,
    pub client: reqwest::Client,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_provider(Arc::new(MockTextProvider::new())).await
}

pub async fn spawn_app_with_provider(provider: Arc<dyn TextProvider>) -> TestApp {
    let store = Arc::new(MemoryInstructionStore::new());
    let state = AppState {
        store: store.clone(),
        text_provider: provider,
    };

    let app = Application::with_state(0, state)
        .await
        .expect("Failed to build application");
    let port = app.port();

    // Run the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestApp {
        address: format!("http://localhost:{}", port),
        store,
        client: reqwest::Client::new(),
    }
}

/// Upload `content` as the instruction file and return the response.
pub async fn upload_instruction(app: &TestApp, content: &str) -> reqwest::Response {
    let part = reqwest::multipart::Part::text(content.to_string())
        .file_name("instructions.txt")
        .mime_str("text/plain")
        .expect("Failed to build multipart part");
    let form = reqwest::multipart::Form::new().part("file", part);

    app.client
        .post(format!("{}/api/train-txt", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send upload request")
}

/// Post a chat message (no history) and return the reply text.
pub async fn chat_reply(app: &TestApp, message: &str) -> String {
    let response = app
        .client
        .post(format!("{}/api/chat", app.address))
        .json(&serde_json::json!({ "userMessage": message }))
        .send()
        .await
        .expect("Failed to send chat request");

    assert!(
        response.status().is_success(),
        "chat request failed: {}",
        response.status()
    );

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    body["reply"]
        .as_str()
        .expect("reply missing from response")
        .to_string()
}
