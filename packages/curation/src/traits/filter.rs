//! Pre-filter trait.

use crate::types::{Document, FilterOutcome};

/// A pre-filter that accepts or rejects a document before scoring.
///
/// Checks must not mutate the document. Filters that keep cross-document
/// state (dedup) own it internally under mutual exclusion so the chain can
/// be shared by reference.
pub trait DocumentFilter: Send + Sync {
    /// Name used to prefix rejection reasons.
    fn name(&self) -> &'static str;

    /// Evaluate the document against this filter's rules.
    fn check(&self, doc: &Document) -> FilterOutcome;
}
