//! Configuration types for the curation pipeline.

use serde::{Deserialize, Serialize};

/// Configuration for the whole pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurationConfig {
    /// Evaluation thresholds, weights, and the improve-attempt budget
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Chunk sizing in token-equivalent units
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Pre-filter bounds and the dedup threshold
    #[serde(default)]
    pub filter: FilterConfig,
}

impl CurationConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the evaluation config.
    pub fn with_evaluation(mut self, evaluation: EvaluationConfig) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Replace the chunking config.
    pub fn with_chunking(mut self, chunking: ChunkingConfig) -> Self {
        self.chunking = chunking;
        self
    }

    /// Replace the filter config.
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }
}

/// Scoring thresholds and the rewrite budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Documents scoring at or above this pass. Default: 0.75.
    pub pass_threshold: f64,

    /// Documents scoring at or above this (but below pass) enter the
    /// improve loop. Default: 0.40.
    pub improve_threshold: f64,

    /// Maximum rewrite attempts per document. Default: 2.
    pub max_improve_attempts: u32,

    /// Per-criterion weights for the final score
    #[serde(default)]
    pub weights: ScoreWeights,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            pass_threshold: 0.75,
            improve_threshold: 0.40,
            max_improve_attempts: 2,
            weights: ScoreWeights::default(),
        }
    }
}

impl EvaluationConfig {
    /// Set the pass threshold.
    pub fn with_pass_threshold(mut self, threshold: f64) -> Self {
        self.pass_threshold = threshold;
        self
    }

    /// Set the improve threshold.
    pub fn with_improve_threshold(mut self, threshold: f64) -> Self {
        self.improve_threshold = threshold;
        self
    }

    /// Set the improve-attempt budget.
    pub fn with_max_improve_attempts(mut self, attempts: u32) -> Self {
        self.max_improve_attempts = attempts;
        self
    }
}

/// Weights for the five scoring criteria.
///
/// The configured total is the normalization denominator for the final
/// score; probes that answer no criteria still contribute their full weight
/// as an implicit zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub coherence: f64,
    pub completeness: f64,
    pub factual_clarity: f64,
    pub rag_suitability: f64,
    pub language_quality: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            coherence: 0.25,
            completeness: 0.25,
            factual_clarity: 0.20,
            rag_suitability: 0.20,
            language_quality: 0.10,
        }
    }
}

impl ScoreWeights {
    /// Iterate over (criterion name, weight) pairs in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("coherence", self.coherence),
            ("completeness", self.completeness),
            ("factual_clarity", self.factual_clarity),
            ("rag_suitability", self.rag_suitability),
            ("language_quality", self.language_quality),
        ]
        .into_iter()
    }

    /// Sum of the configured weights.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, w)| w).sum()
    }
}

/// Chunk sizing in token-equivalent units.
///
/// Character budgets approximate tokens at 4 characters per token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target chunk size in tokens. Default: 512.
    pub chunk_size: usize,

    /// Overlap carried between consecutive chunks, in tokens. Default: 64.
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 512,
            chunk_overlap: 64,
        }
    }
}

impl ChunkingConfig {
    /// Set the chunk size in tokens.
    pub fn with_chunk_size(mut self, tokens: usize) -> Self {
        self.chunk_size = tokens;
        self
    }

    /// Set the chunk overlap in tokens.
    pub fn with_chunk_overlap(mut self, tokens: usize) -> Self {
        self.chunk_overlap = tokens;
        self
    }

    /// Chunk budget in characters.
    pub fn chunk_size_chars(&self) -> usize {
        self.chunk_size * 4
    }

    /// Overlap budget in characters.
    pub fn chunk_overlap_chars(&self) -> usize {
        self.chunk_overlap * 4
    }
}

/// Pre-filter bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum trimmed length in characters. Default: 50.
    pub min_chars: usize,

    /// Maximum trimmed length in characters. Default: 100_000.
    pub max_chars: usize,

    /// Maximum tolerated noise ratio. Default: 0.35.
    pub max_noise_ratio: f64,

    /// Jaccard similarity at or above which a document counts as a near
    /// duplicate. Default: 0.85.
    pub jaccard_threshold: f64,

    /// Relevance keyword allow-list; empty means the relevance filter
    /// passes everything.
    #[serde(default)]
    pub allowed_keywords: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_chars: 50,
            max_chars: 100_000,
            max_noise_ratio: 0.35,
            jaccard_threshold: 0.85,
            allowed_keywords: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Set the length bounds.
    pub fn with_length_bounds(mut self, min_chars: usize, max_chars: usize) -> Self {
        self.min_chars = min_chars;
        self.max_chars = max_chars;
        self
    }

    /// Set the noise ratio ceiling.
    pub fn with_max_noise_ratio(mut self, ratio: f64) -> Self {
        self.max_noise_ratio = ratio;
        self
    }

    /// Set the near-duplicate threshold.
    pub fn with_jaccard_threshold(mut self, threshold: f64) -> Self {
        self.jaccard_threshold = threshold;
        self
    }

    /// Set the relevance keyword allow-list.
    pub fn with_allowed_keywords(
        mut self,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.allowed_keywords = keywords.into_iter().map(|k| k.into()).collect();
        self
    }
}
