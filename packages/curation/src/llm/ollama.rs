//! Ollama implementation of the [`Llm`] trait.
//!
//! Transport, timeout, and retry/backoff live in the `ollama-client`
//! crate; this adapter maps its errors into [`CurationError::Llm`] so the
//! pipeline can degrade instead of failing the batch.

use async_trait::async_trait;
use ollama_client::OllamaClient;

use crate::error::{CurationError, Result};
use crate::traits::Llm;

/// Ollama-backed generation capability.
pub struct OllamaLlm {
    client: OllamaClient,
}

impl OllamaLlm {
    /// Wrap a configured client.
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }

    /// Build a client from environment variables and defaults.
    pub fn from_env() -> Self {
        Self::new(OllamaClient::from_env())
    }
}

#[async_trait]
impl Llm for OllamaLlm {
    async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        json_format: bool,
    ) -> Result<String> {
        self.client
            .generate(prompt, system_prompt, json_format)
            .await
            .map_err(CurationError::llm)
    }
}
