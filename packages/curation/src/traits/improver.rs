//! Improver trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Document;

/// A transformation that modifies a document in place to improve its
/// quality or structure (cleaning, metadata enrichment, chunking).
#[async_trait]
pub trait Improver: Send + Sync {
    /// Apply the improvement to the document.
    async fn improve(&self, doc: &mut Document) -> Result<()>;
}
