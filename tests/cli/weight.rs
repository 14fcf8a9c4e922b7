use crate::cli::support::{mazegraph_in, setup_fixtures};
use predicates::prelude::*;

// ============================================================================
// Weight command tests
// ============================================================================

#[test]
fn test_weight_of_existing_edge() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["weight", "B", "D", "--graph", "graph.toml"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_weight_without_edge_prints_none() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["weight", "D", "A", "--graph", "graph.toml"])
        .assert()
        .success()
        .stdout("none\n");
}

#[test]
fn test_weight_unknown_vertex_is_data_error() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["weight", "A", "Q", "--graph", "graph.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not found"));
}

#[test]
fn test_weight_json_null_for_missing_edge() {
    let dir = setup_fixtures();

    let output = mazegraph_in(&dir)
        .args(["--format", "json", "weight", "D", "A", "--graph", "graph.toml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"from": "D", "to": "A", "weight": null})
    );
}

#[test]
fn test_weight_in_maze_is_entry_cost() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["--format", "records", "weight", "0,0", "0,1", "--maze", "sample.maze"])
        .assert()
        .success()
        .stdout("W 0,0 0,1 4\n");

    mazegraph_in(&dir)
        .args(["weight", "1,0", "2,0", "--maze", "sample.maze"])
        .assert()
        .success()
        .stdout("none\n");
}
