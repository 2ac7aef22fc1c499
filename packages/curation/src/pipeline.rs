//! Pipeline orchestration - filters, scoring, improvement, chunking.

use std::sync::Arc;

use tracing::info;

use crate::evaluators::ScoreAggregator;
use crate::filters::FilterChain;
use crate::improvers::{Chunker, ImproveLoop, MetadataEnricher};
use crate::traits::{Improver, Llm};
use crate::types::{CurationConfig, DocStatus, Document, DocumentMetadata};

/// One raw input document: content plus identity.
#[derive(Debug, Clone)]
pub struct DocumentInput {
    /// Raw text
    pub content: String,

    /// Stable identifier, unique within the batch
    pub doc_id: String,

    /// Provenance label
    pub source: String,
}

impl DocumentInput {
    /// Create an input triple.
    pub fn new(
        content: impl Into<String>,
        doc_id: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            doc_id: doc_id.into(),
            source: source.into(),
        }
    }
}

/// Aggregate statistics for a processed batch.
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    /// Documents submitted
    pub total_input: usize,

    /// Documents that ended in Pass
    pub passed: usize,

    /// Documents rejected by the pre-filter chain
    pub rejected_filters: usize,

    /// Documents rejected at or after scoring
    pub rejected_evaluation: usize,

    /// Chunk records an exporter would receive (a chunkless Pass document
    /// counts as one)
    pub chunks_produced: usize,
}

/// Result of processing a batch: every document in input order, plus
/// stats.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Final state of each document, preserving input order
    pub documents: Vec<Document>,

    /// Aggregate statistics
    pub stats: BatchStats,
}

/// The main orchestrator.
///
/// Documents flow through the pre-filter chain, the score aggregator, the
/// bounded improve loop, and - for passing documents - metadata enrichment
/// and chunking. Processing is sequential in input order; the dedup
/// filter's cross-document state makes order part of the contract
/// (first-seen duplicates survive). No per-document failure is fatal to
/// the batch.
pub struct CurationPipeline {
    filters: FilterChain,
    aggregator: ScoreAggregator,
    improve: ImproveLoop,
    enricher: MetadataEnricher,
    chunker: Chunker,
}

impl CurationPipeline {
    /// Build a pipeline around a generation capability.
    pub fn new(llm: impl Llm + 'static, config: CurationConfig) -> Self {
        Self::with_llm(Arc::new(llm), config)
    }

    /// Build a pipeline from a shared capability handle.
    pub fn with_llm(llm: Arc<dyn Llm>, config: CurationConfig) -> Self {
        Self {
            filters: FilterChain::from_config(&config.filter),
            aggregator: ScoreAggregator::new(llm.clone(), config.evaluation.clone()),
            improve: ImproveLoop::new(llm.clone(), config.evaluation.max_improve_attempts),
            enricher: MetadataEnricher::new(llm),
            chunker: Chunker::new(&config.chunking),
        }
    }

    /// Process a single document through the full pipeline.
    pub async fn process_document(
        &self,
        content: impl Into<String>,
        doc_id: impl Into<String>,
        source: impl Into<String>,
    ) -> Document {
        let metadata = DocumentMetadata::new(doc_id, source);
        let mut doc = Document::new(content, metadata);

        self.filters.run(&mut doc);
        if doc.status == DocStatus::Reject {
            return doc;
        }

        self.aggregator.evaluate(&mut doc).await;

        self.improve.run(&mut doc, &self.aggregator).await;

        if doc.status == DocStatus::Pass {
            // Best-effort enrichment, then chunking; neither can fail the
            // document.
            let _ = self.enricher.improve(&mut doc).await;
            let _ = self.chunker.improve(&mut doc).await;
        }

        doc
    }

    /// Process an ordered batch of documents.
    pub async fn process_batch(&self, inputs: Vec<DocumentInput>) -> BatchOutcome {
        info!("starting batch processing of {} documents", inputs.len());

        let mut stats = BatchStats {
            total_input: inputs.len(),
            ..Default::default()
        };
        let mut documents = Vec::with_capacity(inputs.len());

        for input in inputs {
            let doc = self
                .process_document(input.content, input.doc_id, input.source)
                .await;

            match doc.status {
                DocStatus::Pass => {
                    stats.passed += 1;
                    stats.chunks_produced += doc.chunks.len().max(1);
                }
                DocStatus::Reject if doc.evaluation.is_none() => stats.rejected_filters += 1,
                DocStatus::Reject => stats.rejected_evaluation += 1,
                _ => {}
            }

            documents.push(doc);
        }

        info!(
            "batch complete: {}/{} passed, {} filter-rejected, {} evaluation-rejected, {} chunks",
            stats.passed,
            stats.total_input,
            stats.rejected_filters,
            stats.rejected_evaluation,
            stats.chunks_produced
        );

        BatchOutcome { documents, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockLlm;

    fn passing_llm() -> MockLlm {
        MockLlm::new()
            .with_response(
                "coherence",
                r#"{"coherence": 0.9, "language_quality": 0.9}"#,
            )
            .with_response(
                "completeness",
                r#"{"completeness": 0.9, "factual_clarity": 0.9}"#,
            )
            .with_response("rag_suitability", r#"{"rag_suitability": 0.9}"#)
            .with_response(
                "document analyzer",
                r#"{"keywords": ["test"], "summary": "A test.", "topic_tags": ["Testing"], "language": "en"}"#,
            )
    }

    #[tokio::test]
    async fn test_filter_rejection_skips_scoring() {
        let pipeline = CurationPipeline::new(passing_llm(), CurationConfig::default());

        let doc = pipeline.process_document("tiny", "d1", "test").await;

        assert_eq!(doc.status, DocStatus::Reject);
        assert!(doc.evaluation.is_none());
        assert!(doc.metadata.reject_reason.starts_with("[QualityFilter]"));
    }

    #[tokio::test]
    async fn test_passing_document_is_enriched_and_chunked() {
        let pipeline = CurationPipeline::new(passing_llm(), CurationConfig::default());

        let doc = pipeline
            .process_document(
                "A well-formed document with plenty of sentences. It should pass the filters and score well.",
                "d1",
                "test",
            )
            .await;

        assert_eq!(doc.status, DocStatus::Pass);
        assert_eq!(doc.metadata.keywords, vec!["test"]);
        assert!(!doc.chunks.is_empty());
        assert_eq!(doc.chunks[0].metadata.chunk_id, Some(0));
    }

    #[tokio::test]
    async fn test_batch_stats_account_for_every_document() {
        let pipeline = CurationPipeline::new(passing_llm(), CurationConfig::default());

        let inputs = vec![
            DocumentInput::new(
                "A well-formed document with plenty of sentences. It should pass the filters and score well.",
                "good",
                "test",
            ),
            DocumentInput::new("   ", "blank", "test"),
        ];

        let outcome = pipeline.process_batch(inputs).await;

        assert_eq!(outcome.stats.total_input, 2);
        assert_eq!(outcome.stats.passed, 1);
        assert_eq!(outcome.stats.rejected_filters, 1);
        assert_eq!(outcome.stats.rejected_evaluation, 0);
        assert_eq!(outcome.documents.len(), 2);
        assert_eq!(outcome.documents[0].metadata.doc_id, "good");
        assert_eq!(outcome.documents[1].metadata.doc_id, "blank");
    }
}
