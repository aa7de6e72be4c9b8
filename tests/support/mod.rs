use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for pathscout
pub fn pathscout() -> Command {
    cargo_bin_cmd!("pathscout")
}

/// Eight-node directed graph used across CLI tests: two A-to-D detours,
/// a C/D cycle, and H as a source no other node can reach.
pub const SAMPLE_GRAPH_JSON: &str = r#"{
  "A": ["B", "C"],
  "B": ["C", "D"],
  "C": ["D", "G"],
  "D": ["C"],
  "E": ["F"],
  "F": ["C"],
  "G": ["E"],
  "H": ["C"]
}"#;

/// Write the sample graph into `dir` and return its path
pub fn write_sample_graph(dir: &Path) -> PathBuf {
    let path = dir.join("graph.json");
    fs::write(&path, SAMPLE_GRAPH_JSON).unwrap();
    path
}

/// Write arbitrary graph file contents into `dir` and return the path
#[allow(dead_code)]
pub fn write_graph_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
