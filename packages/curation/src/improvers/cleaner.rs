//! Rule-based text cleaner.

use async_trait::async_trait;
use regex::Regex;

use crate::error::Result;
use crate::traits::Improver;
use crate::types::Document;

/// Removes basic noise: HTML tags, redundant whitespace, and URLs.
///
/// Cleaning is deterministic and idempotent on already-clean text.
pub struct TextCleaner {
    html_tag: Regex,
    spaces: Regex,
    blank_lines: Regex,
    url: Regex,
}

impl TextCleaner {
    pub fn new() -> Self {
        Self {
            html_tag: Regex::new(r"<[^>]+>").unwrap(),
            spaces: Regex::new(r"[ \t]+").unwrap(),
            blank_lines: Regex::new(r"\n\s*\n").unwrap(),
            url: Regex::new(r"https?://(?:[a-zA-Z0-9]|[$\-_@.&+]|[!*(),]|%[0-9a-fA-F]{2})+")
                .unwrap(),
        }
    }

    /// Clean a text snippet, returning the normalized form.
    pub fn clean(&self, text: &str) -> String {
        let text = self.html_tag.replace_all(text, " ");
        let text = self.spaces.replace_all(&text, " ");
        let text = self.blank_lines.replace_all(&text, "\n\n");
        let text = self.url.replace_all(&text, "");
        text.trim().to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Improver for TextCleaner {
    async fn improve(&self, doc: &mut Document) -> Result<()> {
        doc.content = self.clean(&doc.content);
        Ok(())
    }
}
