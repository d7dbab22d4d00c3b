//! Instruction persistence.
//!
//! The bot instruction is a single keyed record: writes are keyed replaces
//! (create-or-overwrite, never append), so concurrent ingestions race with
//! last-write-wins and no ordering guarantee.

use async_trait::async_trait;
use mongodb::{
    bson::doc, options::UpdateOptions, Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;
use tokio::sync::RwLock;

use crate::models::Instruction;

/// Discriminator value for the instruction document in `settings`.
pub const INSTRUCTION_TYPE: &str = "bot_instruction";

/// Keyed instruction storage, injected into request handlers at startup.
#[async_trait]
pub trait InstructionStore: Send + Sync {
    /// Replace the stored instruction with `content`.
    async fn put(&self, content: &str) -> Result<(), AppError>;

    /// Read the current instruction, if one has been ingested.
    async fn get(&self) -> Result<Option<String>, AppError>;

    /// Readiness probe against the backing store.
    async fn health_check(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct MongoInstructionStore {
    client: MongoClient,
    db: Database,
}

impl MongoInstructionStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Connected to MongoDB database");
        Ok(Self { client, db })
    }

    fn settings(&self) -> Collection<Instruction> {
        self.db.collection("settings")
    }
}

#[async_trait]
impl InstructionStore for MongoInstructionStore {
    async fn put(&self, content: &str) -> Result<(), AppError> {
        let options = UpdateOptions::builder().upsert(true).build();
        self.settings()
            .update_one(
                doc! { "type": INSTRUCTION_TYPE },
                doc! { "$set": { "content": content } },
                options,
            )
            .await
            .map_err(|e| {
                tracing::error!("Failed to upsert instruction: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    async fn get(&self) -> Result<Option<String>, AppError> {
        let record = self
            .settings()
            .find_one(doc! { "type": INSTRUCTION_TYPE }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read instruction: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(record.map(|r| r.content))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }
}

/// In-memory store used by tests and local development without MongoDB.
#[derive(Default)]
pub struct MemoryInstructionStore {
    content: RwLock<Option<String>>,
}

impl MemoryInstructionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InstructionStore for MemoryInstructionStore {
    async fn put(&self, content: &str) -> Result<(), AppError> {
        *self.content.write().await = Some(content.to_string());
        Ok(())
    }

    async fn get(&self) -> Result<Option<String>, AppError> {
        Ok(self.content.read().await.clone())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
