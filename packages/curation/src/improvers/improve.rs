//! Bounded improve-and-reevaluate loop.

use std::sync::Arc;

use tracing::{info, warn};

use crate::evaluators::ScoreAggregator;
use crate::prompts;
use crate::traits::{Improver, Llm};
use crate::types::{DocStatus, Document};

use super::cleaner::TextCleaner;

/// Drives a document in the improve band through clean -> rewrite ->
/// re-evaluate rounds, bounded by the attempt budget.
///
/// Each round increments `improve_attempts`, whether or not the rewrite
/// produced new content; a document still in `Improve` when the budget is
/// exhausted is rejected with a reason naming the attempt count.
pub struct ImproveLoop {
    llm: Arc<dyn Llm>,
    cleaner: TextCleaner,
    max_attempts: u32,
}

impl ImproveLoop {
    pub fn new(llm: Arc<dyn Llm>, max_attempts: u32) -> Self {
        Self {
            llm,
            cleaner: TextCleaner::new(),
            max_attempts,
        }
    }

    /// Run the loop for one document; a no-op unless status is `Improve`.
    pub async fn run(&self, doc: &mut Document, aggregator: &ScoreAggregator) {
        while doc.status == DocStatus::Improve
            && doc.metadata.improve_attempts < self.max_attempts
        {
            info!(
                "improving doc {} (attempt {}/{})",
                doc.metadata.doc_id,
                doc.metadata.improve_attempts + 1,
                self.max_attempts
            );

            // Rule-based cleanup before the rewrite; infallible.
            let _ = self.cleaner.improve(doc).await;

            self.rewrite(doc).await;

            aggregator.evaluate(doc).await;
        }

        if doc.status == DocStatus::Improve {
            warn!(
                "doc {} failed to pass after max attempts, rejecting",
                doc.metadata.doc_id
            );
            doc.status = DocStatus::Reject;
            doc.metadata.reject_reason = format!(
                "failed to pass after {} improvement attempts",
                self.max_attempts
            );
        }
    }

    /// Rewrite the content from the most recent evaluation hints.
    ///
    /// A capability failure skips the rewrite for this round (content
    /// unchanged); the attempt counter advances either way so the loop
    /// always terminates.
    async fn rewrite(&self, doc: &mut Document) {
        let hints = doc
            .evaluation
            .as_ref()
            .map(|e| e.improvement_hints.clone())
            .unwrap_or_default();

        let system_prompt = prompts::format_rewrite_prompt(&hints);
        let user_prompt = prompts::format_rewrite_user_prompt(&doc.content);

        match self
            .llm
            .generate(&user_prompt, Some(&system_prompt), false)
            .await
        {
            Ok(improved) => {
                doc.content = improved.trim().to_string();
                info!(
                    "doc {} rewritten (attempt {})",
                    doc.metadata.doc_id,
                    doc.metadata.improve_attempts + 1
                );
            }
            Err(e) => {
                warn!("failed to rewrite doc {}: {}", doc.metadata.doc_id, e);
            }
        }

        doc.metadata.improve_attempts += 1;
    }
}
