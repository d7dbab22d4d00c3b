//! Mock provider implementation for testing.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

/// Mock text provider. Echoes the prompt so tests can assert prompt
/// composition through the HTTP surface.
#[derive(Default)]
pub struct MockTextProvider {
    empty: bool,
}

impl MockTextProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates a response with an empty candidate list.
    pub fn empty() -> Self {
        Self { empty: true }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        if self.empty {
            return Ok(ProviderResponse { text: None });
        }

        Ok(ProviderResponse {
            text: Some(format!("Mock response for: {}", prompt)),
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
