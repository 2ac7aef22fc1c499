//! Document types - the unit of work moving through the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a document.
///
/// Status only moves forward: `Pending` -> {`Pass`, `Improve`, `Reject`}.
/// `Improve` may loop back to itself or resolve to `Pass`/`Reject`, but a
/// document never returns to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocStatus {
    /// Not yet filtered or scored
    Pending,

    /// Accepted; eligible for enrichment and chunking
    Pass,

    /// Scored into the improve band; eligible for the rewrite loop
    Improve,

    /// Rejected by a filter, by scoring, or by attempt exhaustion
    Reject,
}

impl Default for DocStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for DocStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Pass => "PASS",
            Self::Improve => "IMPROVE",
            Self::Reject => "REJECT",
        };
        f.write_str(s)
    }
}

/// Metadata for a document or chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Stable identifier, unique per top-level document
    pub doc_id: String,

    /// Provenance label (filename, URL, dataset name)
    pub source: String,

    /// Position within the parent, present only on chunk documents
    pub chunk_id: Option<usize>,

    /// Enrichment output: 3-5 specific keywords
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Enrichment output: one-sentence summary
    #[serde(default)]
    pub summary: String,

    /// Enrichment output: 1-3 broad topic categories
    #[serde(default)]
    pub topic_tags: Vec<String>,

    /// ISO 639-1 language code
    pub language: String,

    /// Mirror of the final weighted evaluation score
    pub eval_score: f64,

    /// Ingestion timestamp
    pub created_at: DateTime<Utc>,

    /// Number of rewrite attempts consumed, never exceeds the configured max
    pub improve_attempts: u32,

    /// Rejection reason, non-empty iff status is Reject
    #[serde(default)]
    pub reject_reason: String,
}

impl DocumentMetadata {
    /// Create metadata for a new top-level document.
    pub fn new(doc_id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            source: source.into(),
            chunk_id: None,
            keywords: Vec::new(),
            summary: String::new(),
            topic_tags: Vec::new(),
            language: "en".to_string(),
            eval_score: 0.0,
            created_at: Utc::now(),
            improve_attempts: 0,
            reject_reason: String::new(),
        }
    }

    /// Set the ingestion timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Evaluation scores and feedback from the scoring probes.
///
/// Each criterion score and the weighted `final_score` are in [0, 1].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvalScore {
    pub coherence: f64,
    pub completeness: f64,
    pub factual_clarity: f64,
    pub rag_suitability: f64,
    pub language_quality: f64,

    /// Weighted combination of the criterion scores
    pub final_score: f64,

    /// Probe explanations, joined with " | "
    #[serde(default)]
    pub reasoning: String,

    /// Ordered corrective suggestions from the probes (not deduplicated)
    #[serde(default)]
    pub improvement_hints: Vec<String>,
}

impl EvalScore {
    /// Set a criterion score by name. Unknown names are ignored.
    pub fn assign(&mut self, criterion: &str, value: f64) {
        match criterion {
            "coherence" => self.coherence = value,
            "completeness" => self.completeness = value,
            "factual_clarity" => self.factual_clarity = value,
            "rag_suitability" => self.rag_suitability = value,
            "language_quality" => self.language_quality = value,
            _ => {}
        }
    }

    /// Get a criterion score by name.
    pub fn criterion(&self, criterion: &str) -> Option<f64> {
        match criterion {
            "coherence" => Some(self.coherence),
            "completeness" => Some(self.completeness),
            "factual_clarity" => Some(self.factual_clarity),
            "rag_suitability" => Some(self.rag_suitability),
            "language_quality" => Some(self.language_quality),
            _ => None,
        }
    }
}

/// A document moving through the pipeline.
///
/// Chunks are themselves documents with independently cloned metadata; they
/// are populated only on a `Pass` document after chunking and never re-enter
/// the filter, scoring, or improve stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document text, mutable across cleaning and rewriting
    pub content: String,

    /// Document metadata
    pub metadata: DocumentMetadata,

    /// Lifecycle status
    pub status: DocStatus,

    /// Most recent evaluation snapshot, if the document reached scoring
    pub evaluation: Option<EvalScore>,

    /// Child chunk documents, populated by the chunker
    #[serde(default)]
    pub chunks: Vec<Document>,
}

impl Document {
    /// Create a pending document.
    pub fn new(content: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
            status: DocStatus::Pending,
            evaluation: None,
            chunks: Vec::new(),
        }
    }

    /// Mark the document rejected with the given reason.
    ///
    /// The reason is recorded once; later rejections do not overwrite it.
    pub fn reject(&mut self, reason: impl Into<String>) {
        self.status = DocStatus::Reject;
        if self.metadata.reject_reason.is_empty() {
            self.metadata.reject_reason = reason.into();
        }
    }
}

/// Result of a single filter check.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Whether the document passed the filter
    pub passed: bool,

    /// Human-readable reason, set when the check failed
    pub reason: String,
}

impl FilterOutcome {
    /// A passing outcome.
    pub fn pass() -> Self {
        Self {
            passed: true,
            reason: String::new(),
        }
    }

    /// A failing outcome with a reason.
    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_pending() {
        let doc = Document::new("text", DocumentMetadata::new("d1", "test"));
        assert_eq!(doc.status, DocStatus::Pending);
        assert!(doc.evaluation.is_none());
        assert!(doc.chunks.is_empty());
        assert_eq!(doc.metadata.language, "en");
        assert_eq!(doc.metadata.improve_attempts, 0);
    }

    #[test]
    fn test_reject_records_reason_once() {
        let mut doc = Document::new("text", DocumentMetadata::new("d1", "test"));
        doc.reject("first reason");
        doc.reject("second reason");
        assert_eq!(doc.status, DocStatus::Reject);
        assert_eq!(doc.metadata.reject_reason, "first reason");
    }

    #[test]
    fn test_eval_score_assign_and_lookup() {
        let mut score = EvalScore::default();
        score.assign("coherence", 0.8);
        score.assign("rag_suitability", 0.5);
        score.assign("unknown", 0.9);

        assert_eq!(score.criterion("coherence"), Some(0.8));
        assert_eq!(score.criterion("rag_suitability"), Some(0.5));
        assert_eq!(score.criterion("completeness"), Some(0.0));
        assert_eq!(score.criterion("unknown"), None);
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&DocStatus::Improve).unwrap();
        assert_eq!(json, "\"IMPROVE\"");
    }
}
