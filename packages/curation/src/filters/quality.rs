//! Length and noise-ratio filter.

use regex::Regex;

use crate::traits::DocumentFilter;
use crate::types::{Document, FilterOutcome};

/// Rejects documents that are too short, too long, or too noisy.
///
/// The noise ratio is `1 - word_chars / length` over the trimmed text,
/// where `word_chars` counts regex `\w` matches. Underscores and digits
/// count as non-noise; the default 0.35 ceiling was tuned against exactly
/// this definition.
pub struct QualityFilter {
    min_chars: usize,
    max_chars: usize,
    max_noise_ratio: f64,
    word_char: Regex,
}

impl QualityFilter {
    /// Create a filter with explicit bounds.
    pub fn new(min_chars: usize, max_chars: usize, max_noise_ratio: f64) -> Self {
        Self {
            min_chars,
            max_chars,
            max_noise_ratio,
            word_char: Regex::new(r"\w").unwrap(),
        }
    }
}

impl Default for QualityFilter {
    fn default() -> Self {
        Self::new(50, 100_000, 0.35)
    }
}

impl DocumentFilter for QualityFilter {
    fn name(&self) -> &'static str {
        "QualityFilter"
    }

    fn check(&self, doc: &Document) -> FilterOutcome {
        let text = doc.content.trim();
        let length = text.chars().count();

        if length < self.min_chars {
            return FilterOutcome::fail(format!(
                "document too short ({} < {})",
                length, self.min_chars
            ));
        }

        if length > self.max_chars {
            return FilterOutcome::fail(format!(
                "document too long ({} > {})",
                length, self.max_chars
            ));
        }

        let word_chars = self.word_char.find_iter(text).count();
        let noise_ratio = 1.0 - (word_chars as f64 / length as f64);
        if noise_ratio > self.max_noise_ratio {
            return FilterOutcome::fail(format!(
                "high noise ratio ({:.2} > {})",
                noise_ratio, self.max_noise_ratio
            ));
        }

        FilterOutcome::pass()
    }
}
