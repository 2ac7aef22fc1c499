//! Integration tests for the full curation pipeline.
//!
//! These tests drive whole batches through filter -> score -> improve ->
//! chunk with a mock generation capability and check the batch-level
//! contracts: dedup across documents, the improve-loop attempt budget,
//! and the exporter-facing records.

use curation::{
    report, testing::MockLlm, CurationConfig, CurationPipeline, DocStatus, DocumentInput,
    EvaluationConfig,
};

const GOOD_DOC: &str = "The migration service copies records in batches of one thousand. \
    Each batch is verified against the source checksum before commit. \
    Failed batches are retried twice and then quarantined for review. \
    Operators receive a summary report when the run completes.";

/// Mock wired so every probe scores high and enrichment succeeds.
fn passing_llm() -> MockLlm {
    MockLlm::new()
        .with_response(
            "coherence",
            r#"{"coherence": 0.9, "language_quality": 0.9, "reasoning": "flows well"}"#,
        )
        .with_response(
            "completeness",
            r#"{"completeness": 0.9, "factual_clarity": 0.9, "reasoning": "complete"}"#,
        )
        .with_response("rag_suitability", r#"{"rag_suitability": 0.9}"#)
        .with_response(
            "document analyzer",
            r#"{"keywords": ["migration", "batches"], "summary": "Batch migration.", "topic_tags": ["Engineering"], "language": "en"}"#,
        )
}

/// Mock wired so every probe scores mid-band forever.
fn improve_band_llm() -> MockLlm {
    MockLlm::new()
        .with_response("expert editor", "A rewritten but still mediocre document.")
        .with_response(
            "coherence",
            r#"{"coherence": 0.5, "language_quality": 0.5, "improvement_hints": ["clarify"]}"#,
        )
        .with_response(
            "completeness",
            r#"{"completeness": 0.5, "factual_clarity": 0.5}"#,
        )
        .with_response("rag_suitability", r#"{"rag_suitability": 0.5}"#)
}

#[tokio::test]
async fn test_three_document_batch_end_to_end() {
    let pipeline = CurationPipeline::new(passing_llm(), CurationConfig::default());

    let inputs = vec![
        DocumentInput::new(GOOD_DOC, "good", "a.txt"),
        DocumentInput::new("   \n  ", "blank", "b.txt"),
        DocumentInput::new(GOOD_DOC, "copy", "c.txt"),
    ];

    let outcome = pipeline.process_batch(inputs).await;

    assert_eq!(outcome.stats.total_input, 3);
    assert_eq!(outcome.stats.passed, 1);
    assert_eq!(outcome.stats.rejected_filters, 2);

    let good = &outcome.documents[0];
    assert_eq!(good.status, DocStatus::Pass);

    let blank = &outcome.documents[1];
    assert_eq!(blank.status, DocStatus::Reject);
    assert!(blank.metadata.reject_reason.contains("too short"));

    let copy = &outcome.documents[2];
    assert_eq!(copy.status, DocStatus::Reject);
    assert!(copy.metadata.reject_reason.contains("exact duplicate"));
}

#[tokio::test]
async fn test_near_duplicate_rejected_across_batch() {
    let config = CurationConfig::default();
    let pipeline = CurationPipeline::new(passing_llm(), config);

    // Same text with one token swapped at the end keeps trigram overlap
    // above the 0.85 default threshold.
    let original = "one two three four five six seven eight nine ten eleven twelve \
        thirteen fourteen fifteen sixteen seventeen eighteen nineteen twenty \
        twentyone twentytwo twentythree twentyfour twentyfive twentysix";
    let near_copy = original.replace("twentysix", "different");

    let outcome = pipeline
        .process_batch(vec![
            DocumentInput::new(original, "first", "a.txt"),
            DocumentInput::new(near_copy, "second", "b.txt"),
        ])
        .await;

    let second = &outcome.documents[1];
    assert_eq!(second.status, DocStatus::Reject);
    assert!(second.metadata.reject_reason.contains("near duplicate"));
    assert!(second.metadata.reject_reason.contains("first"));
}

#[tokio::test]
async fn test_improve_band_document_exhausts_attempts() {
    let config = CurationConfig::default().with_evaluation(
        EvaluationConfig::default().with_max_improve_attempts(2),
    );
    let pipeline = CurationPipeline::new(improve_band_llm(), config);

    let doc = pipeline.process_document(GOOD_DOC, "stuck", "a.txt").await;

    assert_eq!(doc.status, DocStatus::Reject);
    assert_eq!(doc.metadata.improve_attempts, 2);
    assert!(doc
        .metadata
        .reject_reason
        .contains("2 improvement attempts"));
    assert!(doc.chunks.is_empty());
}

#[tokio::test]
async fn test_capability_outage_degrades_to_rejections_not_errors() {
    let pipeline = CurationPipeline::new(MockLlm::new().failing(), CurationConfig::default());

    let outcome = pipeline
        .process_batch(vec![DocumentInput::new(GOOD_DOC, "good", "a.txt")])
        .await;

    // The batch completes; the document is rejected on zero scores.
    let doc = &outcome.documents[0];
    assert_eq!(doc.status, DocStatus::Reject);
    assert_eq!(doc.evaluation.as_ref().unwrap().final_score, 0.0);
    assert_eq!(outcome.stats.rejected_evaluation, 1);
}

#[tokio::test]
async fn test_batch_records_for_exporters() {
    let pipeline = CurationPipeline::new(passing_llm(), CurationConfig::default());

    let outcome = pipeline
        .process_batch(vec![
            DocumentInput::new(GOOD_DOC, "good", "a.txt"),
            DocumentInput::new("x", "tiny", "b.txt"),
        ])
        .await;

    let chunks = report::chunk_records(&outcome.documents);
    let rejects = report::reject_records(&outcome.documents);
    let reports = report::score_reports(&outcome.documents);

    assert!(!chunks.is_empty());
    assert_eq!(chunks[0].metadata.doc_id, "good");
    assert_eq!(chunks[0].metadata.keywords, vec!["migration", "batches"]);
    assert!(chunks[0].metadata.eval_score > 0.75);

    assert_eq!(rejects.len(), 1);
    assert_eq!(rejects[0].doc_id, "tiny");

    // Only the document that reached scoring gets a report.
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].doc_id, "good");
    assert_eq!(reports[0].status, DocStatus::Pass);
    assert_eq!(reports[0].scores.coherence, 0.9);
}
