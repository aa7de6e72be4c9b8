use crate::support::{pathscout, write_graph_file, write_sample_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_nodes_lists_sorted_with_out_degree() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    let output = pathscout()
        .args(["--graph", graph.to_str().unwrap(), "nodes"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "A (out: 2)",
            "B (out: 2)",
            "C (out: 2)",
            "D (out: 1)",
            "E (out: 1)",
            "F (out: 1)",
            "G (out: 1)",
            "H (out: 1)",
        ]
    );
}

#[test]
fn test_nodes_json_output() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    let output = pathscout()
        .args(["--format", "json", "--graph", graph.to_str().unwrap(), "nodes"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 8);
    assert_eq!(entries[0]["id"], "A");
    assert_eq!(entries[0]["out_degree"], 2);
}

#[test]
fn test_nodes_records_output() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    pathscout()
        .args([
            "--format",
            "records",
            "--graph",
            graph.to_str().unwrap(),
            "nodes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H pathscout=1 records=1 mode=nodes count=8",
        ))
        .stdout(predicate::str::contains("N A out=2"))
        .stdout(predicate::str::contains("N H out=1"));
}

#[test]
fn test_nodes_empty_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph_file(dir.path(), "empty.json", "{}");

    pathscout()
        .args(["--graph", graph.to_str().unwrap(), "nodes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No nodes declared"));
}
