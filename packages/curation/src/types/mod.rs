//! Core data types for the curation pipeline.

pub mod config;
pub mod document;

pub use config::{ChunkingConfig, CurationConfig, EvaluationConfig, FilterConfig, ScoreWeights};
pub use document::{DocStatus, Document, DocumentMetadata, EvalScore, FilterOutcome};
