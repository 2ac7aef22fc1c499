//! LLM-backed metadata enrichment.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::Result;
use crate::evaluators::response::{parse_json_response, string_field, string_list_field};
use crate::prompts;
use crate::traits::{Improver, Llm};
use crate::types::Document;

/// Generates keywords, a one-sentence summary, topic tags, and the
/// language code for a document.
///
/// Enrichment is best-effort: a capability failure or malformed response
/// leaves the metadata untouched.
pub struct MetadataEnricher {
    llm: Arc<dyn Llm>,
}

impl MetadataEnricher {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Improver for MetadataEnricher {
    async fn improve(&self, doc: &mut Document) -> Result<()> {
        let user_prompt = prompts::format_enrich_prompt(&doc.content);

        let raw = match self
            .llm
            .generate(&user_prompt, Some(prompts::ENRICH_PROMPT), true)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "metadata enrichment failed for doc {}: {}",
                    doc.metadata.doc_id, e
                );
                return Ok(());
            }
        };

        let data = parse_json_response(&raw);
        if data.is_empty() {
            return Ok(());
        }

        doc.metadata.keywords = string_list_field(&data, "keywords");
        doc.metadata.summary = string_field(&data, "summary");
        doc.metadata.topic_tags = string_list_field(&data, "topic_tags");
        let language = string_field(&data, "language");
        doc.metadata.language = if language.is_empty() {
            "en".to_string()
        } else {
            language
        };

        debug!("metadata enriched for doc {}", doc.metadata.doc_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockLlm;
    use crate::types::DocumentMetadata;

    fn doc() -> Document {
        Document::new("Document text.", DocumentMetadata::new("d1", "test"))
    }

    #[tokio::test]
    async fn test_enrichment_fills_metadata() {
        let llm: Arc<dyn Llm> = Arc::new(MockLlm::new().with_default_response(
            r#"{"keywords": ["retrieval", "pipeline"], "summary": "About retrieval.", "topic_tags": ["AI"], "language": "en"}"#,
        ));
        let enricher = MetadataEnricher::new(llm);
        let mut doc = doc();

        enricher.improve(&mut doc).await.unwrap();

        assert_eq!(doc.metadata.keywords, vec!["retrieval", "pipeline"]);
        assert_eq!(doc.metadata.summary, "About retrieval.");
        assert_eq!(doc.metadata.topic_tags, vec!["AI"]);
        assert_eq!(doc.metadata.language, "en");
    }

    #[tokio::test]
    async fn test_enrichment_failure_leaves_metadata_untouched() {
        let llm: Arc<dyn Llm> = Arc::new(MockLlm::new().failing());
        let enricher = MetadataEnricher::new(llm);
        let mut doc = doc();

        enricher.improve(&mut doc).await.unwrap();

        assert!(doc.metadata.keywords.is_empty());
        assert!(doc.metadata.summary.is_empty());
        assert_eq!(doc.metadata.language, "en");
    }

    #[tokio::test]
    async fn test_malformed_response_leaves_metadata_untouched() {
        let llm: Arc<dyn Llm> = Arc::new(MockLlm::new().with_default_response("```garbage"));
        let enricher = MetadataEnricher::new(llm);
        let mut doc = doc();

        enricher.improve(&mut doc).await.unwrap();

        assert!(doc.metadata.keywords.is_empty());
    }
}
