//! Testing utilities including a mock generation capability.
//!
//! Useful for exercising the pipeline without a running model server.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{CurationError, Result};
use crate::traits::Llm;

/// A mock LLM returning deterministic, configurable responses.
///
/// Responses are routed by substring match against the system prompt and
/// then the user prompt, in the order they were registered; the first
/// match wins. Unmatched calls fall back to the default response (an
/// empty JSON object unless overridden).
#[derive(Default)]
pub struct MockLlm {
    /// (needle, response) routes in registration order
    routes: Arc<RwLock<Vec<(String, String)>>>,

    /// Response for unrouted calls
    default_response: Arc<RwLock<String>>,

    /// When set, every call fails like an exhausted retry budget
    fail: Arc<RwLock<bool>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockLlmCall>>>,
}

/// Record of a call made to the mock.
#[derive(Debug, Clone)]
pub struct MockLlmCall {
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub json_format: bool,
}

impl MockLlm {
    /// Create a mock whose unrouted calls return `{}`.
    pub fn new() -> Self {
        let mock = Self::default();
        *mock.default_response.write().unwrap() = "{}".to_string();
        mock
    }

    /// Register a response for calls whose system or user prompt contains
    /// `needle`.
    pub fn with_response(self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.routes
            .write()
            .unwrap()
            .push((needle.into(), response.into()));
        self
    }

    /// Set the response for unrouted calls.
    pub fn with_default_response(self, response: impl Into<String>) -> Self {
        *self.default_response.write().unwrap() = response.into();
        self
    }

    /// Make every call fail.
    pub fn failing(self) -> Self {
        *self.fail.write().unwrap() = true;
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockLlmCall> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls made to this mock.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl Llm for MockLlm {
    async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        json_format: bool,
    ) -> Result<String> {
        self.calls.write().unwrap().push(MockLlmCall {
            prompt: prompt.to_string(),
            system_prompt: system_prompt.map(|s| s.to_string()),
            json_format,
        });

        if *self.fail.read().unwrap() {
            return Err(CurationError::Llm("mock generation failure".into()));
        }

        let routes = self.routes.read().unwrap();
        for (needle, response) in routes.iter() {
            let in_system = system_prompt.is_some_and(|s| s.contains(needle.as_str()));
            if in_system || prompt.contains(needle.as_str()) {
                return Ok(response.clone());
            }
        }

        Ok(self.default_response.read().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_routes_by_system_prompt_substring() {
        let mock = MockLlm::new()
            .with_response("evaluator", "scored")
            .with_response("editor", "rewritten");

        let scored = mock
            .generate("text", Some("You are an evaluator."), true)
            .await
            .unwrap();
        let rewritten = mock
            .generate("text", Some("You are an editor."), false)
            .await
            .unwrap();

        assert_eq!(scored, "scored");
        assert_eq!(rewritten, "rewritten");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_unrouted_calls_use_default() {
        let mock = MockLlm::new();
        let response = mock.generate("anything", None, true).await.unwrap();
        assert_eq!(response, "{}");
    }

    #[tokio::test]
    async fn test_failing_mock_errors_every_call() {
        let mock = MockLlm::new().failing();
        assert!(mock.generate("anything", None, false).await.is_err());
    }
}
