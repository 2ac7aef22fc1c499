//! Client for a local Ollama server.
//!
//! Wraps the `/api/generate` endpoint with a per-request timeout and
//! bounded retries with exponential backoff. Callers that can tolerate a
//! missing completion should catch the error and degrade rather than
//! propagate it.
//!
//! # Example
//!
//! ```rust,ignore
//! use ollama_client::OllamaClient;
//!
//! let client = OllamaClient::new().with_model("llama3.2");
//! let text = client.generate("Summarize this.", None, false).await?;
//! ```

pub mod error;

pub use error::{OllamaError, Result};

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default base URL for a locally running Ollama server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model to generate with.
pub const DEFAULT_MODEL: &str = "llama3.2";

/// HTTP client for Ollama's generate API.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
    max_retries: u32,
    timeout: Duration,
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OllamaClient {
    /// Create a client with default settings (local server, llama3.2).
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.3,
            max_retries: 3,
            timeout: Duration::from_secs(60),
        }
    }

    /// Create a client from `OLLAMA_BASE_URL` and `OLLAMA_MODEL` env vars,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        let mut client = Self::new();
        if let Ok(url) = std::env::var("OLLAMA_BASE_URL") {
            client.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(model) = std::env::var("OLLAMA_MODEL") {
            client.model = model;
        }
        client
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the base URL (trailing slashes are stripped).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum number of generation attempts.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a completion, retrying with exponential backoff.
    ///
    /// Attempt n (n >= 2) is preceded by a 2^(n-1) second delay. When all
    /// attempts fail the last error is returned.
    pub async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        json_format: bool,
    ) -> Result<String> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            if attempt > 1 {
                let delay = Duration::from_secs(1u64 << (attempt - 1));
                tokio::time::sleep(delay).await;
            }

            match self.generate_once(prompt, system_prompt, json_format).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    warn!(
                        "Ollama generation failed (attempt {}/{}): {}",
                        attempt, self.max_retries, e
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| OllamaError::Api("generation failed with no attempts".to_string())))
    }

    /// Make a single generate request without retries.
    async fn generate_once(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        json_format: bool,
    ) -> Result<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            system: system_prompt,
            format: json_format.then_some("json"),
            options: GenerateOptions {
                temperature: self.temperature,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| OllamaError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaError::Api(format!("{}: {}", status, body)));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::Parse(e.to_string()))?;

        Ok(body.response)
    }
}

/// Request body for `/api/generate`.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
    options: GenerateOptions,
}

/// Model options passed through to Ollama.
#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

/// Response body from `/api/generate` (non-streaming).
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}
