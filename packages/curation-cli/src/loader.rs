//! Input loading - text files from a directory.

use std::path::Path;

use anyhow::{Context, Result};
use curation::DocumentInput;
use tracing::warn;
use uuid::Uuid;

/// Load all `.txt` and `.md` files from a directory as document inputs.
///
/// Files are read in filename order so batch results (and dedup outcomes)
/// are reproducible. An unreadable file is logged and skipped; the rest of
/// the batch continues. Each document gets a short random id and its
/// filename as the source label.
pub fn load_documents(dir: &Path) -> Result<Vec<DocumentInput>> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("input directory {} not readable", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("txt") | Some("md")
            )
        })
        .collect();
    entries.sort();

    let mut docs = Vec::new();
    for path in entries {
        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let doc_id = short_id();
                docs.push(DocumentInput::new(content, doc_id, source));
            }
            Err(e) => {
                warn!("failed to read file {}: {}", path.display(), e);
            }
        }
    }

    Ok(docs)
}

/// Short UUID prefix for simpler logging.
fn short_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_txt_and_md_in_filename_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.md"), "markdown doc").unwrap();
        std::fs::write(dir.path().join("a.txt"), "text doc").unwrap();
        std::fs::write(dir.path().join("c.json"), "{}").unwrap();

        let docs = load_documents(dir.path()).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].source, "a.txt");
        assert_eq!(docs[1].source, "b.md");
        assert_eq!(docs[0].content, "text doc");
        assert_eq!(docs[0].doc_id.len(), 8);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        assert!(load_documents(Path::new("/definitely/not/here")).is_err());
    }
}
