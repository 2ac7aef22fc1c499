//! Tolerant parsing of structured LLM responses.

use serde_json::{Map, Value};
use tracing::warn;

/// Parse a JSON object out of raw LLM output.
///
/// Strips Markdown code-fence markers (```json / ```) before parsing.
/// Malformed input or a non-object top level yields an empty map rather
/// than an error; callers degrade to zero scores or untouched metadata.
pub fn parse_json_response(raw: &str) -> Map<String, Value> {
    let mut cleaned = raw.trim();

    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }

    match serde_json::from_str::<Value>(cleaned.trim()) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            warn!("expected JSON object from LLM, got {}", other);
            Map::new()
        }
        Err(e) => {
            warn!("failed to parse JSON from LLM: {}", e);
            Map::new()
        }
    }
}

/// Read a float field from a parsed response, clamped to [0, 1].
pub fn score_field(map: &Map<String, Value>, key: &str) -> f64 {
    map.get(key)
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
        .clamp(0.0, 1.0)
}

/// Read a string field from a parsed response.
pub fn string_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Read a list-of-strings field from a parsed response.
pub fn string_list_field(map: &Map<String, Value>, key: &str) -> Vec<String> {
    map.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}
