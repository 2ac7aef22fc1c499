//! Sentence-aware overlapping chunker.

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::Improver;
use crate::types::{ChunkingConfig, Document};

/// Splits an accepted document into overlapping, sentence-respecting
/// chunks sized to a character budget (4 characters per token-equivalent).
///
/// Populates `doc.chunks` and leaves `doc.content` untouched. Each chunk
/// is a child document carrying a cloned copy of the parent metadata with
/// its own `chunk_id`, plus the parent's evaluation snapshot; chunks are
/// never re-scored.
pub struct Chunker {
    chunk_size_chars: usize,
    chunk_overlap_chars: usize,
}

impl Chunker {
    pub fn new(config: &ChunkingConfig) -> Self {
        Self {
            chunk_size_chars: config.chunk_size_chars(),
            chunk_overlap_chars: config.chunk_overlap_chars(),
        }
    }

    /// Split content into chunk texts.
    fn split_text(&self, text: &str) -> Vec<String> {
        let sentences = split_sentences(text);
        let mut chunks: Vec<String> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut current_len = 0usize;

        for sentence in sentences {
            let sentence_len = sentence.chars().count();

            // A lone sentence above the budget still goes into a chunk of
            // its own; only close when something is already accumulated.
            if current_len + sentence_len > self.chunk_size_chars && !current.is_empty() {
                chunks.push(current.join(" "));

                // Seed the next chunk by walking the closed chunk
                // backward while the overlap budget holds.
                let mut overlap: Vec<String> = Vec::new();
                let mut overlap_len = 0usize;
                for prev in current.iter().rev() {
                    let prev_len = prev.chars().count();
                    if overlap_len + prev_len <= self.chunk_overlap_chars {
                        overlap.insert(0, prev.clone());
                        overlap_len += prev_len + 1;
                    } else {
                        break;
                    }
                }

                current = overlap;
                current_len = overlap_len;
            }

            current_len += sentence_len + 1;
            current.push(sentence);
        }

        if !current.is_empty() {
            chunks.push(current.join(" "));
        }

        chunks
    }
}

#[async_trait]
impl Improver for Chunker {
    async fn improve(&self, doc: &mut Document) -> Result<()> {
        let texts = self.split_text(&doc.content);

        doc.chunks = texts
            .into_iter()
            .enumerate()
            .map(|(i, content)| {
                let mut metadata = doc.metadata.clone();
                metadata.chunk_id = Some(i);

                let mut chunk = Document::new(content, metadata);
                chunk.evaluation = doc.evaluation.clone();
                chunk
            })
            .collect();

        Ok(())
    }
}

/// Split text into sentences on `.` / `!` / `?` boundaries.
///
/// A boundary requires the punctuation to be followed by whitespace and an
/// uppercase letter, or by (possibly trailing-whitespace-only) end of
/// text. Results are trimmed; empty segments are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        if matches!(chars[i], '.' | '!' | '?') {
            let mut next = i + 1;
            while next < chars.len() && chars[next].is_whitespace() {
                next += 1;
            }

            let at_end = next >= chars.len();
            let boundary = at_end || (next > i + 1 && chars[next].is_uppercase());
            if boundary {
                let sentence: String = chars[start..=i].iter().collect();
                let trimmed = sentence.trim();
                if !trimmed.is_empty() {
                    sentences.push(trimmed.to_string());
                }
                start = next;
                i = next;
                continue;
            }
        }
        i += 1;
    }

    if start < chars.len() {
        let tail: String = chars[start..].iter().collect();
        let trimmed = tail.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentMetadata;

    fn chunker(size_tokens: usize, overlap_tokens: usize) -> Chunker {
        Chunker::new(
            &ChunkingConfig::default()
                .with_chunk_size(size_tokens)
                .with_chunk_overlap(overlap_tokens),
        )
    }

    #[test]
    fn test_split_sentences_on_boundaries() {
        let sentences = split_sentences("First sentence. Second one! Third? The end.");
        assert_eq!(
            sentences,
            vec!["First sentence.", "Second one!", "Third?", "The end."]
        );
    }

    #[test]
    fn test_split_ignores_lowercase_continuation() {
        // "e.g. lowercase" must not split: no uppercase after the period.
        let sentences = split_sentences("This uses e.g. lowercase continuations. Fine.");
        assert_eq!(
            sentences,
            vec!["This uses e.g. lowercase continuations.", "Fine."]
        );
    }

    #[tokio::test]
    async fn test_single_sentence_yields_one_chunk() {
        let chunker = chunker(512, 64);
        let mut doc = Document::new(
            "Just one short sentence.",
            DocumentMetadata::new("d1", "test"),
        );

        chunker.improve(&mut doc).await.unwrap();

        assert_eq!(doc.chunks.len(), 1);
        assert_eq!(doc.chunks[0].metadata.chunk_id, Some(0));
        assert_eq!(doc.chunks[0].content, "Just one short sentence.");
        assert_eq!(doc.content, "Just one short sentence.");
    }

    #[tokio::test]
    async fn test_overlap_repeats_trailing_sentences() {
        // Budget of 20 tokens = 80 chars per chunk, 10 tokens = 40 chars
        // overlap. Four ~30-char sentences force at least two chunks.
        let text = "Alpha sentence number one here. Beta sentence number two here. \
                    Gamma sentence number three here. Delta sentence number four here.";
        let chunker = chunker(20, 10);
        let mut doc = Document::new(text, DocumentMetadata::new("d1", "test"));

        chunker.improve(&mut doc).await.unwrap();

        assert!(doc.chunks.len() >= 2);
        for (i, chunk) in doc.chunks.iter().enumerate() {
            assert_eq!(chunk.metadata.chunk_id, Some(i));
        }

        // The second chunk opens with the closing sentence of the first.
        let first = &doc.chunks[0].content;
        let second = &doc.chunks[1].content;
        let last_sentence_of_first = split_sentences(first).pop().unwrap();
        assert!(second.starts_with(&last_sentence_of_first));
    }

    #[tokio::test]
    async fn test_oversized_sentence_gets_own_chunk() {
        let long_sentence = format!("Wall of {} end.", "word ".repeat(100));
        let text = format!("Short intro sentence here. {}", long_sentence);
        let chunker = chunker(10, 2);
        let mut doc = Document::new(text, DocumentMetadata::new("d1", "test"));

        chunker.improve(&mut doc).await.unwrap();

        // The oversized sentence exceeds the 40-char budget but is still
        // placed, unsplit, in a chunk of its own.
        assert!(doc.chunks.iter().any(|c| c.content.chars().count() > 40));
    }

    #[tokio::test]
    async fn test_chunk_metadata_is_independent_clone() {
        let chunker = chunker(512, 64);
        let mut doc = Document::new(
            "A sentence for the chunker to carry over.",
            DocumentMetadata::new("d1", "test"),
        );
        doc.metadata.keywords = vec!["alpha".to_string()];

        chunker.improve(&mut doc).await.unwrap();

        doc.metadata.keywords.push("beta".to_string());
        assert_eq!(doc.chunks[0].metadata.keywords, vec!["alpha"]);
        assert_eq!(doc.chunks[0].metadata.doc_id, "d1");
    }

    #[tokio::test]
    async fn test_evaluation_carried_to_chunks() {
        use crate::types::EvalScore;

        let chunker = chunker(512, 64);
        let mut doc = Document::new(
            "A sentence for the chunker.",
            DocumentMetadata::new("d1", "test"),
        );
        doc.evaluation = Some(EvalScore {
            final_score: 0.9,
            ..Default::default()
        });

        chunker.improve(&mut doc).await.unwrap();

        assert_eq!(doc.chunks[0].evaluation.as_ref().unwrap().final_score, 0.9);
    }
}
