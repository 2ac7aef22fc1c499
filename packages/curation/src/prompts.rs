//! LLM prompts for scoring, rewriting, and metadata enrichment.

/// System prompt for the quality probe (coherence, language quality).
pub const QUALITY_PROMPT: &str = r#"You are an expert AI evaluator assessing document quality for a Retrieval-Augmented Generation (RAG) system.
Evaluate the following text on two criteria from 0.0 to 1.0:
1. coherence: Does the text flow logically? Are the sentences well-connected?
2. language_quality: Is the spelling and grammar correct? Is the tone appropriate?

Provide constructive feedback if the score is below 0.8.

Respond ONLY with a valid JSON object matching this schema:
{
    "coherence": float,
    "language_quality": float,
    "reasoning": "brief explanation",
    "improvement_hints": ["hint 1", "hint 2"]
}"#;

/// System prompt for the completeness probe (completeness, factual clarity).
pub const COMPLETENESS_PROMPT: &str = r#"You are an expert AI evaluator assessing document completeness for a RAG system.
Evaluate the following text on two criteria from 0.0 to 1.0:
1. completeness: Does the text contain complete thoughts? Is it missing crucial context or cut off abruptly?
2. factual_clarity: Are the facts and statements stated clearly without ambiguity?

Provide constructive feedback if the score is below 0.8.

Respond ONLY with a valid JSON object matching this schema:
{
    "completeness": float,
    "factual_clarity": float,
    "reasoning": "brief explanation",
    "improvement_hints": ["hint 1", "hint 2"]
}"#;

/// System prompt for the retrieval-suitability probe.
pub const RAG_SUITABILITY_PROMPT: &str = r#"You are an expert AI evaluator assessing document suitability for a RAG system.
Evaluate the following text on a single criterion from 0.0 to 1.0:
1. rag_suitability: Is the text information-dense? Can it be easily split into meaningful chunks? Does it avoid excessive boilerplate or formatting artifacts?

Provide constructive feedback if the score is below 0.8.

Respond ONLY with a valid JSON object matching this schema:
{
    "rag_suitability": float,
    "reasoning": "brief explanation",
    "improvement_hints": ["hint 1", "hint 2"]
}"#;

/// System prompt for metadata enrichment.
pub const ENRICH_PROMPT: &str = r#"You are an expert AI document analyzer. Given a text, extract meaningful metadata for a RAG system.
Analyze the text and provide the following:
1. keywords: A list of 3-5 specific keywords.
2. summary: A concise 1-sentence summary of the text.
3. topic_tags: A list of 1-3 broad topic categories (e.g., 'AI', 'Finance', 'Engineering').
4. language: The ISO 639-1 language code of the text (e.g., 'en', 'vi', 'es').

Respond ONLY with a valid JSON object matching this schema:
{
    "keywords": ["keyword1", "keyword2"],
    "summary": "This document describes...",
    "topic_tags": ["CategoryA", "CategoryB"],
    "language": "en"
}"#;

/// User prompt wrapping the text to evaluate.
pub fn format_evaluate_prompt(text: &str) -> String {
    format!("Text to evaluate:\n\n{}", text)
}

/// User prompt wrapping the text to analyze for metadata.
pub fn format_enrich_prompt(text: &str) -> String {
    format!("Text to analyze:\n\n{}", text)
}

/// System prompt for the rewrite step, built from evaluator hints.
///
/// Falls back to a generic instruction when no hints were produced.
pub fn format_rewrite_prompt(hints: &[String]) -> String {
    let hint_block = if hints.is_empty() {
        "Improve clarity and completeness.".to_string()
    } else {
        hints.join("\n- ")
    };

    format!(
        r#"You are an expert editor refining text for a RAG system.
Improve the given text based on this feedback from an evaluator:
- {}

Maintain the original meaning and language. DO NOT add conversational filler like 'Here is the improved version'.
Output ONLY the improved text."#,
        hint_block
    )
}

/// User prompt wrapping the text to rewrite.
pub fn format_rewrite_user_prompt(text: &str) -> String {
    format!("Original text:\n\n{}", text)
}
