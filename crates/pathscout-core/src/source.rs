//! Loading adjacency mappings from disk
//!
//! Graphs are plain `node -> [neighbors]` mappings serialized as a JSON
//! object or a YAML mapping. The file extension selects the parser.
//! Loading performs no validation beyond deserialization; duplicate
//! neighbor entries and dangling neighbor references are accepted as-is.

use std::fs;
use std::path::Path;

use crate::error::{PathscoutError, Result};
use crate::graph::Adjacency;

/// Extensions accepted by [`load_adjacency`]
pub const SUPPORTED_EXTENSIONS: &str = "json, yaml, yml";

/// Load an adjacency mapping from a JSON or YAML file
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_adjacency(path: &Path) -> Result<Adjacency<String>> {
    if !path.is_file() {
        return Err(PathscoutError::GraphNotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let raw = fs::read_to_string(path)?;

    let graph: Adjacency<String> = match extension.as_str() {
        "json" => serde_json::from_str(&raw).map_err(|e| PathscoutError::InvalidGraph {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?,
        "yaml" | "yml" => serde_yaml::from_str(&raw).map_err(|e| PathscoutError::InvalidGraph {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?,
        other => {
            return Err(PathscoutError::unsupported(
                "graph file extension",
                if other.is_empty() { "(none)" } else { other },
                SUPPORTED_EXTENSIONS,
            ))
        }
    };

    tracing::debug!(nodes = graph.len(), "loaded adjacency mapping");
    Ok(graph)
}
