//! Output writers - chunk JSONL, rejection list, and score reports.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use curation::report::{ChunkRecord, RejectRecord, ScoreReport};
use serde_json::Value;
use tracing::info;

/// Append chunk records to `documents.jsonl`, one JSON object per line.
pub fn export_chunks(output_dir: &Path, records: &[ChunkRecord]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let path = output_dir.join("documents.jsonl");
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open {}", path.display()))?;

    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(file, "{}", line)?;
    }

    info!("exported {} chunks to {}", records.len(), path.display());
    Ok(())
}

/// Merge rejection records into `rejected.json`.
pub fn export_rejected(output_dir: &Path, records: &[RejectRecord]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let path = output_dir.join("rejected.json");
    merge_into_json_array(&path, records)?;

    info!(
        "exported {} rejected records to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

/// Merge score reports into `eval_report.json`.
pub fn export_report(output_dir: &Path, reports: &[ScoreReport]) -> Result<()> {
    if reports.is_empty() {
        return Ok(());
    }

    let path = output_dir.join("eval_report.json");
    merge_into_json_array(&path, reports)?;

    info!("exported evaluation report to {}", path.display());
    Ok(())
}

/// Read an existing JSON array file (if any), extend it with the new
/// items, and rewrite it. An unreadable or malformed existing file is
/// treated as empty.
fn merge_into_json_array<T: serde::Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let mut existing: Vec<Value> = std::fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default();

    for item in items {
        existing.push(serde_json::to_value(item)?);
    }

    let rendered = serde_json::to_string_pretty(&existing)?;
    std::fs::write(path, rendered).with_context(|| format!("cannot write {}", path.display()))?;

    Ok(())
}
