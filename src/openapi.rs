//! Shallow OpenAPI document inspection.
//!
//! The checker only needs evidence that spec generation produced something
//! sane: a readable JSON object with a populated `paths` mapping. Full
//! schema validation is the generator's job, not ours, so the document is
//! parsed as a generic [`serde_json::Value`].

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// How many path keys to surface in the transcript.
const PREVIEW_KEYS: usize = 3;

/// Shallow shape summary of an OpenAPI document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenApiSummary {
    /// Number of entries in the top-level `paths` mapping (0 if absent)
    pub path_count: usize,
    /// Up to the first three path keys, in document order
    pub sample_paths: Vec<String>,
}

/// Parse the document at `path` and summarize its `paths` mapping.
///
/// A missing file, invalid JSON, and any I/O failure all collapse into the
/// returned error; the caller reports it and folds it into the overall
/// verdict. There is nothing actionable in distinguishing them here.
pub fn inspect_openapi_document(path: &Path) -> Result<OpenApiSummary> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let doc: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let paths = doc.get("paths").and_then(Value::as_object);
    let path_count = paths.map_or(0, serde_json::Map::len);
    let sample_paths = paths.map_or_else(Vec::new, |m| {
        m.keys().take(PREVIEW_KEYS).cloned().collect()
    });

    Ok(OpenApiSummary {
        path_count,
        sample_paths,
    })
}
