//! Document improvement - cleaning, rewriting, enrichment, and chunking.

pub mod chunker;
pub mod cleaner;
pub mod enricher;
pub mod improve;

pub use chunker::Chunker;
pub use cleaner::TextCleaner;
pub use enricher::MetadataEnricher;
pub use improve::ImproveLoop;
