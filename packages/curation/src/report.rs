//! Batch output records - the interface exporters consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DocStatus, Document, EvalScore};

/// One retrieval-ready chunk: content plus exportable metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub page_content: String,
    pub metadata: RecordMetadata,
}

/// Exportable metadata subset (internal tracking fields omitted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordMetadata {
    pub doc_id: String,
    pub source: String,
    pub chunk_id: Option<usize>,
    pub keywords: Vec<String>,
    pub summary: String,
    pub topic_tags: Vec<String>,
    pub language: String,
    pub eval_score: f64,
    pub created_at: DateTime<Utc>,
}

impl From<&Document> for RecordMetadata {
    fn from(doc: &Document) -> Self {
        let m = &doc.metadata;
        Self {
            doc_id: m.doc_id.clone(),
            source: m.source.clone(),
            chunk_id: m.chunk_id,
            keywords: m.keywords.clone(),
            summary: m.summary.clone(),
            topic_tags: m.topic_tags.clone(),
            language: m.language.clone(),
            eval_score: m.eval_score,
            created_at: m.created_at,
        }
    }
}

/// A rejected document and why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectRecord {
    pub doc_id: String,
    pub source: String,
    pub reason: String,
}

/// Scoring report for one document that reached evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub doc_id: String,
    pub source: String,
    pub status: DocStatus,
    pub final_score: f64,
    pub scores: CriterionBreakdown,
    pub reasoning: String,
    pub improve_attempts: u32,
}

/// Per-criterion scores for a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionBreakdown {
    pub coherence: f64,
    pub completeness: f64,
    pub factual_clarity: f64,
    pub rag_suitability: f64,
    pub language_quality: f64,
}

impl From<&EvalScore> for CriterionBreakdown {
    fn from(eval: &EvalScore) -> Self {
        Self {
            coherence: eval.coherence,
            completeness: eval.completeness,
            factual_clarity: eval.factual_clarity,
            rag_suitability: eval.rag_suitability,
            language_quality: eval.language_quality,
        }
    }
}

/// Flatten Pass documents into chunk records.
///
/// A Pass document without chunks exports itself as a single record.
pub fn chunk_records(docs: &[Document]) -> Vec<ChunkRecord> {
    let mut records = Vec::new();

    for doc in docs.iter().filter(|d| d.status == DocStatus::Pass) {
        if doc.chunks.is_empty() {
            records.push(ChunkRecord {
                page_content: doc.content.clone(),
                metadata: RecordMetadata::from(doc),
            });
        } else {
            for chunk in &doc.chunks {
                records.push(ChunkRecord {
                    page_content: chunk.content.clone(),
                    metadata: RecordMetadata::from(chunk),
                });
            }
        }
    }

    records
}

/// Collect rejection records for every rejected document.
pub fn reject_records(docs: &[Document]) -> Vec<RejectRecord> {
    docs.iter()
        .filter(|d| d.status == DocStatus::Reject)
        .map(|d| RejectRecord {
            doc_id: d.metadata.doc_id.clone(),
            source: d.metadata.source.clone(),
            reason: d.metadata.reject_reason.clone(),
        })
        .collect()
}

/// Collect score reports for every document that reached evaluation.
pub fn score_reports(docs: &[Document]) -> Vec<ScoreReport> {
    docs.iter()
        .filter_map(|d| {
            d.evaluation.as_ref().map(|eval| ScoreReport {
                doc_id: d.metadata.doc_id.clone(),
                source: d.metadata.source.clone(),
                status: d.status,
                final_score: eval.final_score,
                scores: CriterionBreakdown::from(eval),
                reasoning: eval.reasoning.clone(),
                improve_attempts: d.metadata.improve_attempts,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentMetadata;

    fn pass_doc_with_chunks(id: &str, chunk_count: usize) -> Document {
        let mut doc = Document::new("parent text", DocumentMetadata::new(id, "test"));
        doc.status = DocStatus::Pass;
        doc.evaluation = Some(EvalScore {
            final_score: 0.8,
            ..Default::default()
        });

        for i in 0..chunk_count {
            let mut metadata = doc.metadata.clone();
            metadata.chunk_id = Some(i);
            doc.chunks
                .push(Document::new(format!("chunk {}", i), metadata));
        }

        doc
    }

    #[test]
    fn test_chunk_records_flatten_chunks() {
        let docs = vec![pass_doc_with_chunks("a", 3), pass_doc_with_chunks("b", 0)];

        let records = chunk_records(&docs);

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].metadata.chunk_id, Some(0));
        assert_eq!(records[2].metadata.chunk_id, Some(2));
        // Chunkless Pass document exports itself whole.
        assert_eq!(records[3].metadata.doc_id, "b");
        assert_eq!(records[3].page_content, "parent text");
    }

    #[test]
    fn test_chunk_records_skip_non_pass_documents() {
        let mut rejected = Document::new("text", DocumentMetadata::new("r", "test"));
        rejected.reject("nope");

        assert!(chunk_records(&[rejected]).is_empty());
    }

    #[test]
    fn test_reject_records_carry_reason() {
        let mut doc = Document::new("text", DocumentMetadata::new("r", "test"));
        doc.reject("[QualityFilter] document too short (4 < 50)");

        let records = reject_records(&[doc]);

        assert_eq!(records.len(), 1);
        assert!(records[0].reason.contains("too short"));
    }

    #[test]
    fn test_score_reports_only_for_evaluated_documents() {
        let evaluated = pass_doc_with_chunks("a", 1);
        let unevaluated = Document::new("text", DocumentMetadata::new("b", "test"));

        let reports = score_reports(&[evaluated, unevaluated]);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].doc_id, "a");
        assert_eq!(reports[0].final_score, 0.8);
    }
}
