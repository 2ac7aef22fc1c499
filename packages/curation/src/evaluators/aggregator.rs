//! Weighted score aggregation and status classification.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::info;

use crate::traits::{Llm, ScoringProbe};
use crate::types::{DocStatus, Document, EvalScore, EvaluationConfig};

use super::probes::{CompletenessProbe, QualityProbe, RagSuitabilityProbe};

/// Runs all scoring probes and classifies the document from the weighted
/// final score.
pub struct ScoreAggregator {
    probes: Vec<Box<dyn ScoringProbe>>,
    config: EvaluationConfig,
}

impl ScoreAggregator {
    /// Build the standard probe set against the given capability.
    pub fn new(llm: Arc<dyn Llm>, config: EvaluationConfig) -> Self {
        let probes: Vec<Box<dyn ScoringProbe>> = vec![
            Box::new(QualityProbe::new(llm.clone())),
            Box::new(CompletenessProbe::new(llm.clone())),
            Box::new(RagSuitabilityProbe::new(llm)),
        ];
        Self::with_probes(probes, config)
    }

    /// Build an aggregator from an explicit probe list.
    pub fn with_probes(probes: Vec<Box<dyn ScoringProbe>>, config: EvaluationConfig) -> Self {
        Self { probes, config }
    }

    /// Evaluate the document, setting `evaluation`, `eval_score`, and
    /// `status`.
    ///
    /// Probe failures contribute nothing to the merged score map; their
    /// criteria default to zero. The final score is normalized by the
    /// configured weight total, not by the criteria actually answered, so
    /// a silent probe still drags the score down.
    pub async fn evaluate(&self, doc: &mut Document) {
        info!("evaluation started for doc {}", doc.metadata.doc_id);

        let mut merged: IndexMap<String, f64> = IndexMap::new();
        let mut reasoning = Vec::new();
        let mut hints = Vec::new();

        for probe in &self.probes {
            let result = probe.score(&doc.content).await;
            merged.extend(result.scores);
            if !result.reasoning.is_empty() {
                reasoning.push(result.reasoning);
            }
            hints.extend(result.improvement_hints);
        }

        let mut evaluation = EvalScore {
            reasoning: reasoning.join(" | "),
            improvement_hints: hints,
            ..Default::default()
        };

        let mut final_score = 0.0;
        let mut total_weight = 0.0;
        for (criterion, weight) in self.config.weights.iter() {
            let score = merged.get(criterion).copied().unwrap_or(0.0);
            evaluation.assign(criterion, score);
            final_score += score * weight;
            total_weight += weight;
        }
        if total_weight > 0.0 {
            final_score /= total_weight;
        }

        evaluation.final_score = final_score;
        doc.metadata.eval_score = final_score;

        if final_score >= self.config.pass_threshold {
            doc.status = DocStatus::Pass;
        } else if final_score >= self.config.improve_threshold {
            doc.status = DocStatus::Improve;
        } else {
            doc.reject(format!(
                "evaluation score too low ({:.2} < {:.2})",
                final_score, self.config.improve_threshold
            ));
        }

        doc.evaluation = Some(evaluation);

        info!(
            "doc {} evaluation finished: score={:.2}, status={}",
            doc.metadata.doc_id, final_score, doc.status
        );
    }
}
