//! The three scoring probes.
//!
//! Each probe asks the generation capability to rate the text against its
//! criteria and parses the structured response. Probe sets are disjoint:
//! quality covers coherence and language quality, completeness covers
//! completeness and factual clarity, and the RAG probe covers suitability.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::prompts;
use crate::traits::{Llm, ProbeScores, ScoringProbe};

use super::response::{parse_json_response, score_field, string_field, string_list_field};

/// Run one probe prompt and parse the criteria it owns.
///
/// Any capability failure or malformed response degrades to an empty
/// [`ProbeScores`].
async fn run_probe(
    llm: &dyn Llm,
    probe_name: &str,
    system_prompt: &str,
    criteria: &[&str],
    text: &str,
) -> ProbeScores {
    let user_prompt = prompts::format_evaluate_prompt(text);

    let raw = match llm.generate(&user_prompt, Some(system_prompt), true).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("{} probe failed: {}", probe_name, e);
            return ProbeScores::default();
        }
    };

    let data = parse_json_response(&raw);
    if data.is_empty() {
        return ProbeScores::default();
    }

    let mut result = ProbeScores {
        reasoning: string_field(&data, "reasoning"),
        improvement_hints: string_list_field(&data, "improvement_hints"),
        ..Default::default()
    };
    for criterion in criteria {
        result
            .scores
            .insert(criterion.to_string(), score_field(&data, criterion));
    }

    result
}

/// Rates coherence and language quality.
pub struct QualityProbe {
    llm: Arc<dyn Llm>,
}

impl QualityProbe {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ScoringProbe for QualityProbe {
    fn name(&self) -> &'static str {
        "quality"
    }

    async fn score(&self, text: &str) -> ProbeScores {
        run_probe(
            self.llm.as_ref(),
            self.name(),
            prompts::QUALITY_PROMPT,
            &["coherence", "language_quality"],
            text,
        )
        .await
    }
}

/// Rates completeness and factual clarity.
pub struct CompletenessProbe {
    llm: Arc<dyn Llm>,
}

impl CompletenessProbe {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ScoringProbe for CompletenessProbe {
    fn name(&self) -> &'static str {
        "completeness"
    }

    async fn score(&self, text: &str) -> ProbeScores {
        run_probe(
            self.llm.as_ref(),
            self.name(),
            prompts::COMPLETENESS_PROMPT,
            &["completeness", "factual_clarity"],
            text,
        )
        .await
    }
}

/// Rates suitability for chunking and retrieval.
pub struct RagSuitabilityProbe {
    llm: Arc<dyn Llm>,
}

impl RagSuitabilityProbe {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ScoringProbe for RagSuitabilityProbe {
    fn name(&self) -> &'static str {
        "rag_suitability"
    }

    async fn score(&self, text: &str) -> ProbeScores {
        run_probe(
            self.llm.as_ref(),
            self.name(),
            prompts::RAG_SUITABILITY_PROMPT,
            &["rag_suitability"],
            text,
        )
        .await
    }
}
