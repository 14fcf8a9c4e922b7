use crate::cli::support::{mazegraph_in, setup_fixtures, write_file};
use predicates::prelude::*;

// ============================================================================
// Info command tests
// ============================================================================

#[test]
fn test_info_graph_human() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["info", "--graph", "graph.toml"])
        .assert()
        .success()
        .stdout("source: graph\nvertices: 5\nedges: 5\n");
}

#[test]
fn test_info_maze_json() {
    let dir = setup_fixtures();

    let output = mazegraph_in(&dir)
        .args(["--format", "json", "info", "--maze", "sample.maze"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"source": "maze", "vertices": 6, "edges": 10})
    );
}

#[test]
fn test_info_records() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["--format", "records", "info", "--maze", "sample.maze"])
        .assert()
        .success()
        .stdout("I source=maze vertices=6 edges=10\n");
}

#[test]
fn test_info_json_graph_document() {
    let dir = setup_fixtures();
    write_file(
        dir.path(),
        "pair.json",
        r#"{"vertices": ["x", "y"], "edges": [{"from": "x", "to": "y", "bidirectional": true}]}"#,
    );

    mazegraph_in(&dir)
        .args(["info", "--graph", "pair.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("edges: 2"));
}

#[test]
fn test_info_rejects_negative_weight_in_document() {
    let dir = setup_fixtures();
    write_file(
        dir.path(),
        "negative.toml",
        "vertices = [\"A\", \"B\"]\n\n[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = -3\n",
    );

    mazegraph_in(&dir)
        .args(["info", "--graph", "negative.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("-3"));
}

#[test]
fn test_info_rejects_unknown_extension() {
    let dir = setup_fixtures();
    write_file(dir.path(), "graph.yaml", "vertices: []\n");

    mazegraph_in(&dir)
        .args(["info", "--graph", "graph.yaml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph document"));
}
