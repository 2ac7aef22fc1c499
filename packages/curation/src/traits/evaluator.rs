//! Scoring probe trait.

use async_trait::async_trait;
use indexmap::IndexMap;

/// Partial scoring result from one probe.
///
/// `scores` maps criterion names to values in [0, 1]. A probe that failed
/// (capability error, malformed response) returns the empty default; the
/// aggregator treats missing criteria as zero.
#[derive(Debug, Clone, Default)]
pub struct ProbeScores {
    /// Criterion name -> score, in response order
    pub scores: IndexMap<String, f64>,

    /// Free-text explanation from the probe
    pub reasoning: String,

    /// Corrective suggestions for the improve loop
    pub improvement_hints: Vec<String>,
}

impl ProbeScores {
    /// True when the probe produced no criterion scores.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// A scoring probe that rates document text against some of the criteria.
///
/// Probes never abort the batch: any internal failure is logged and
/// surfaces as an empty [`ProbeScores`].
#[async_trait]
pub trait ScoringProbe: Send + Sync {
    /// Probe name, used in logs.
    fn name(&self) -> &'static str;

    /// Score the document text.
    async fn score(&self, text: &str) -> ProbeScores;
}
