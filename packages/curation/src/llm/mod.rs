//! Generation capability implementations.

mod ollama;

pub use ollama::OllamaLlm;
