//! Application startup and lifecycle management.

use crate::config::ChatConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use crate::services::{InstructionStore, MongoInstructionStore};
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state. Store and provider are injected so tests can
/// drive the full HTTP surface against in-process doubles.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InstructionStore>,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Build the API router for the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/api/train-txt", post(handlers::train_txt))
        .route("/api/chat", post(handlers::chat))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application: connect storage eagerly with a readiness ping,
    /// construct the Gemini provider and bind the listener.
    pub async fn build(config: ChatConfig) -> Result<Self, AppError> {
        let store = MongoInstructionStore::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;
        store.health_check().await.map_err(|e| {
            tracing::error!("MongoDB readiness ping failed: {}", e);
            e
        })?;

        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.models.text_model.clone(),
        };
        let text_provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Gemini text provider"
        );

        let state = AppState {
            store: Arc::new(store),
            text_provider,
        };

        Self::with_state(config.common.port, state).await
    }

    /// Bind and assemble the server around an explicit state. Port 0 binds a
    /// random port; tests use this with the memory store and mock provider.
    pub async fn with_state(port: u16, state: AppState) -> Result<Self, AppError> {
        let app = router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
