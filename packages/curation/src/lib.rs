//! Document Curation Library
//!
//! Curates raw text documents for downstream retrieval use: rejects
//! low-quality or duplicate input, scores the remainder against weighted
//! quality criteria, iteratively rewrites borderline documents, and splits
//! accepted documents into overlapping, sentence-respecting chunks.
//!
//! # Design Philosophy
//!
//! - Cheap rule-based rejection before any LLM call
//! - Capability seams as traits, composed as ordered collections
//! - Degrade, never abort: a failed LLM call costs one document a score,
//!   not the batch
//! - Chunking is character-budgeted and sentence-aware, not token-exact
//!
//! # Usage
//!
//! ```rust,ignore
//! use curation::{CurationConfig, CurationPipeline, DocumentInput};
//! use curation::testing::MockLlm;
//!
//! let pipeline = CurationPipeline::new(MockLlm::new(), CurationConfig::default());
//!
//! let outcome = pipeline
//!     .process_batch(vec![DocumentInput::new("Some text.", "doc-1", "notes.txt")])
//!     .await;
//!
//! let chunks = curation::report::chunk_records(&outcome.documents);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Capability abstractions (Llm, DocumentFilter, ScoringProbe, Improver)
//! - [`types`] - Documents, metadata, evaluation snapshots, configuration
//! - [`filters`] - Quality, dedup, and relevance pre-filters
//! - [`evaluators`] - Scoring probes and the weighted aggregator
//! - [`improvers`] - Cleaner, improve loop, enricher, chunker
//! - [`pipeline`] - Batch orchestration
//! - [`report`] - Output records for exporters
//! - [`testing`] - Mock capability implementations

pub mod error;
pub mod evaluators;
pub mod filters;
pub mod improvers;
pub mod pipeline;
pub mod prompts;
pub mod report;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "ollama")]
pub mod llm;

// Re-export core types at crate root
pub use error::{CurationError, Result};
pub use traits::{DocumentFilter, Improver, Llm, ProbeScores, ScoringProbe};
pub use types::{
    ChunkingConfig, CurationConfig, DocStatus, Document, DocumentMetadata, EvalScore,
    EvaluationConfig, FilterConfig, FilterOutcome, ScoreWeights,
};

// Re-export pipeline components
pub use evaluators::{parse_json_response, ScoreAggregator};
pub use filters::{DedupFilter, FilterChain, QualityFilter, RelevanceFilter};
pub use improvers::{Chunker, ImproveLoop, MetadataEnricher, TextCleaner};
pub use pipeline::{BatchOutcome, BatchStats, CurationPipeline, DocumentInput};
pub use report::{ChunkRecord, RejectRecord, ScoreReport};

#[cfg(feature = "ollama")]
pub use llm::OllamaLlm;

// Re-export testing utilities
pub use testing::MockLlm;
