//! Keyword relevance filter.

use regex::Regex;

use crate::traits::DocumentFilter;
use crate::types::{Document, FilterOutcome};

/// Rejects documents that contain none of the allow-listed keywords.
///
/// With an empty allow-list the filter passes everything. Matching is
/// case-insensitive: first a plain substring check, then a word-boundary
/// match, either of which passes the document.
pub struct RelevanceFilter {
    keywords: Vec<String>,
    boundary_patterns: Vec<Regex>,
}

impl RelevanceFilter {
    /// Create a filter from a keyword allow-list.
    pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .collect();

        let boundary_patterns = keywords
            .iter()
            .map(|k| Regex::new(&format!(r"\b{}\b", regex::escape(k))).unwrap())
            .collect();

        Self {
            keywords,
            boundary_patterns,
        }
    }
}

impl Default for RelevanceFilter {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl DocumentFilter for RelevanceFilter {
    fn name(&self) -> &'static str {
        "RelevanceFilter"
    }

    fn check(&self, doc: &Document) -> FilterOutcome {
        if self.keywords.is_empty() {
            return FilterOutcome::pass();
        }

        let text = doc.content.to_lowercase();

        if self.keywords.iter().any(|k| text.contains(k.as_str())) {
            return FilterOutcome::pass();
        }

        if self.boundary_patterns.iter().any(|p| p.is_match(&text)) {
            return FilterOutcome::pass();
        }

        FilterOutcome::fail("document lacks relevance (no matching keywords found)")
    }
}
