//! Pre-filter chain - cheap rejections before any LLM call.
//!
//! Filters run in a fixed order (quality, dedup, relevance); the first
//! failure short-circuits the chain and rejects the document with a reason
//! prefixed by the filter's name.

pub mod dedup;
pub mod quality;
pub mod relevance;

pub use dedup::DedupFilter;
pub use quality::QualityFilter;
pub use relevance::RelevanceFilter;

use tracing::{debug, info};

use crate::traits::DocumentFilter;
use crate::types::{DocStatus, Document, FilterConfig};

/// An ordered, short-circuiting chain of pre-filters.
pub struct FilterChain {
    filters: Vec<Box<dyn DocumentFilter>>,
}

impl FilterChain {
    /// Build a chain from an explicit filter list.
    pub fn new(filters: Vec<Box<dyn DocumentFilter>>) -> Self {
        Self { filters }
    }

    /// Build the standard chain (quality, dedup, relevance) from config.
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(vec![
            Box::new(QualityFilter::new(
                config.min_chars,
                config.max_chars,
                config.max_noise_ratio,
            )),
            Box::new(DedupFilter::new(config.jaccard_threshold)),
            Box::new(RelevanceFilter::new(config.allowed_keywords.clone())),
        ])
    }

    /// Run the document through all filters.
    ///
    /// The first failing filter rejects the document with a reason of the
    /// form `[FilterName] reason`; remaining filters are skipped.
    pub fn run(&self, doc: &mut Document) {
        for filter in &self.filters {
            let outcome = filter.check(doc);
            if !outcome.passed {
                doc.reject(format!("[{}] {}", filter.name(), outcome.reason));
                info!(
                    "document {} rejected: {}",
                    doc.metadata.doc_id, doc.metadata.reject_reason
                );
                return;
            }
        }
        debug!("document {} passed all pre-filters", doc.metadata.doc_id);
    }

    /// Run a batch of documents, partitioning into (passed, rejected).
    ///
    /// Input order is preserved within each partition.
    pub fn run_batch(&self, docs: Vec<Document>) -> (Vec<Document>, Vec<Document>) {
        let mut passed = Vec::new();
        let mut rejected = Vec::new();

        for mut doc in docs {
            self.run(&mut doc);
            if doc.status == DocStatus::Reject {
                rejected.push(doc);
            } else {
                passed.push(doc);
            }
        }

        (passed, rejected)
    }
}
