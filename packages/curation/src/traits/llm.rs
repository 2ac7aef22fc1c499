//! Generation capability trait.

use async_trait::async_trait;

use crate::error::Result;

/// Text-generation capability.
///
/// Implementations wrap a specific provider and own their transport
/// concerns (timeouts, retries, backoff). A returned error means the
/// provider failed after its own retry budget; callers treat it as "no
/// usable output" and degrade (zero scores, skipped rewrite) rather than
/// failing the batch.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Generate text for a prompt.
    ///
    /// `json_format` asks the provider for a structured (JSON) completion;
    /// the raw text is still returned and parsed by the caller.
    async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        json_format: bool,
    ) -> Result<String>;
}
