use crate::cli::support::{mazegraph_in, setup_fixtures, write_file};
use predicates::prelude::*;

// ============================================================================
// Run command tests
// ============================================================================

#[test]
fn test_run_dijkstra_human() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["run", "A", "D", "--graph", "graph.toml"])
        .assert()
        .success()
        .stdout(
            "dijkstra begun\n\
             finished A cost=0\n\
             finished B cost=1\n\
             finished C cost=3\n\
             finished D cost=4\n\
             search over: A -> B -> C -> D\n",
        );
}

#[test]
fn test_run_bfs_records() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args([
            "--format",
            "records",
            "run",
            "A",
            "D",
            "--graph",
            "graph.toml",
            "--algorithm",
            "bfs",
        ])
        .assert()
        .success()
        .stdout("B bfs\nV A\nV B\nV C\nV D\nS\n");
}

#[test]
fn test_run_dfs_json() {
    let dir = setup_fixtures();

    let output = mazegraph_in(&dir)
        .args([
            "--format",
            "json",
            "run",
            "A",
            "D",
            "-g",
            "graph.toml",
            "-a",
            "dfs",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["algorithm"], "dfs");
    assert_eq!(json["start"], "A");
    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(events[0]["event"], "begun");
    assert_eq!(events[1], serde_json::json!({"event": "visit", "vertex": "A"}));
    assert_eq!(
        events[5],
        serde_json::json!({"event": "search_over", "path": null})
    );
}

#[test]
fn test_run_dijkstra_json_unreachable_end_has_empty_path() {
    let dir = setup_fixtures();

    let output = mazegraph_in(&dir)
        .args(["--format", "json", "run", "A", "Z", "--graph", "graph.toml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let events = json["events"].as_array().unwrap();
    let last = events.last().unwrap();
    assert_eq!(last["event"], "search_over");
    assert_eq!(last["path"], serde_json::json!([]));
    let finished = events.iter().filter(|e| e["event"] == "finished").count();
    assert_eq!(finished, 4);
}

#[test]
fn test_run_bfs_unreachable_end_is_reported() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["run", "A", "Z", "--graph", "graph.toml", "-a", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visit D"))
        .stdout(predicate::str::contains("search over").not())
        .stdout(predicate::str::contains("end vertex Z not reached"));
}

#[test]
fn test_run_quiet_prints_only_outcome() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["--quiet", "run", "A", "D", "--graph", "graph.toml"])
        .assert()
        .success()
        .stdout("search over: A -> B -> C -> D\n");
}

#[test]
fn test_run_missing_start_is_data_error() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["run", "Q", "D", "--graph", "graph.toml"])
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("vertex not found"));
}

#[test]
fn test_run_missing_start_json_envelope() {
    let dir = setup_fixtures();

    let output = mazegraph_in(&dir)
        .args(["--format", "json", "run", "Q", "D", "--graph", "graph.toml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_vertex");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_run_maze_shortest_path() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["run", "0,0", "2,0", "--maze", "sample.maze"])
        .assert()
        .success()
        .stdout(predicate::str::contains("finished 2,0 cost=18"))
        .stdout(predicate::str::contains(
            "search over: 0,0 -> 0,1 -> 1,1 -> 2,1 -> 2,0",
        ));
}

#[test]
fn test_run_maze_bfs_records() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args([
            "--format",
            "records",
            "run",
            "0,0",
            "1,0",
            "--maze",
            "sample.maze",
            "--algorithm",
            "bfs",
        ])
        .assert()
        .success()
        .stdout("B bfs\nV 0,0\nV 0,1\nV 1,0\nS\n");
}

#[test]
fn test_run_bad_juncture_is_usage_error() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["run", "zero", "2,0", "--maze", "sample.maze"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid juncture"));
}

#[test]
fn test_run_malformed_maze_reports_line() {
    let dir = setup_fixtures();
    write_file(dir.path(), "broken.maze", "+-+\n|x|\n+-+\n");

    mazegraph_in(&dir)
        .args(["run", "0,0", "0,0", "--maze", "broken.maze"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid maze at line 2"));
}

#[test]
fn test_run_requires_exactly_one_source() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["run", "A", "D"])
        .assert()
        .code(2);

    mazegraph_in(&dir)
        .args([
            "run",
            "A",
            "D",
            "--graph",
            "graph.toml",
            "--maze",
            "sample.maze",
        ])
        .assert()
        .code(2);
}

#[test]
fn test_run_unknown_algorithm_is_usage_error() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["run", "A", "D", "--graph", "graph.toml", "-a", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn test_run_unknown_algorithm_json_envelope() {
    let dir = setup_fixtures();

    let output = mazegraph_in(&dir)
        .args([
            "--format",
            "json",
            "run",
            "A",
            "D",
            "--graph",
            "graph.toml",
            "-a",
            "astar",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_run_missing_graph_file_is_failure() {
    let dir = setup_fixtures();

    mazegraph_in(&dir)
        .args(["run", "A", "D", "--graph", "missing.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}
