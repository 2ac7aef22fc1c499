//! Scoring - LLM probes, response parsing, and weighted aggregation.

pub mod aggregator;
pub mod probes;
pub mod response;

pub use aggregator::ScoreAggregator;
pub use probes::{CompletenessProbe, QualityProbe, RagSuitabilityProbe};
pub use response::parse_json_response;
