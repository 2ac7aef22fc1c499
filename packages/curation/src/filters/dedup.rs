//! Exact and near-duplicate filter.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use sha2::{Digest, Sha256};

use crate::traits::DocumentFilter;
use crate::types::{Document, FilterOutcome};

/// Rejects exact duplicates (content hash) and near duplicates
/// (word-trigram Jaccard similarity) within a pipeline's lifetime.
///
/// The filter owns the seen-hash set and the doc-id -> trigram-set map.
/// Both are mutated under a single write lock per check, so the chain can
/// be shared by reference; if the filter stage is ever parallelized the
/// processing order must stay deterministic, because the first-seen
/// document of a near-duplicate cluster always survives.
pub struct DedupFilter {
    jaccard_threshold: f64,
    state: RwLock<DedupState>,
}

#[derive(Default)]
struct DedupState {
    seen_hashes: HashSet<String>,
    seen_trigrams: HashMap<String, HashSet<String>>,
}

impl DedupFilter {
    /// Create a filter with the given near-duplicate threshold.
    pub fn new(jaccard_threshold: f64) -> Self {
        Self {
            jaccard_threshold,
            state: RwLock::new(DedupState::default()),
        }
    }

    /// Number of documents retained for comparison so far.
    pub fn seen_count(&self) -> usize {
        self.state.read().unwrap().seen_hashes.len()
    }
}

impl Default for DedupFilter {
    fn default() -> Self {
        Self::new(0.85)
    }
}

impl DocumentFilter for DedupFilter {
    fn name(&self) -> &'static str {
        "DedupFilter"
    }

    fn check(&self, doc: &Document) -> FilterOutcome {
        let text = doc.content.trim();
        let hash = content_hash(text);
        let trigrams = trigram_set(text);

        // One write lock for the whole check keeps lookup and insert atomic.
        let mut state = self.state.write().unwrap();

        if state.seen_hashes.contains(&hash) {
            return FilterOutcome::fail("exact duplicate of previously seen content");
        }

        if !trigrams.is_empty() {
            for (seen_id, seen_trigrams) in &state.seen_trigrams {
                if seen_trigrams.is_empty() {
                    continue;
                }

                let similarity = jaccard_similarity(&trigrams, seen_trigrams);
                if similarity >= self.jaccard_threshold {
                    return FilterOutcome::fail(format!(
                        "near duplicate of doc {} (Jaccard similarity {:.2})",
                        seen_id, similarity
                    ));
                }
            }
        }

        state.seen_hashes.insert(hash);
        state
            .seen_trigrams
            .insert(doc.metadata.doc_id.clone(), trigrams);

        FilterOutcome::pass()
    }
}

/// SHA-256 hex digest of the trimmed content.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Word-level trigram set over lowercase whitespace tokens.
///
/// Texts with fewer than three tokens fall back to their token set.
pub fn trigram_set(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    if words.len() < 3 {
        return words.into_iter().map(|w| w.to_string()).collect();
    }

    words.windows(3).map(|w| w.join(" ")).collect()
}

/// Jaccard similarity |A ∩ B| / |A ∪ B| over two sets.
pub fn jaccard_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}
