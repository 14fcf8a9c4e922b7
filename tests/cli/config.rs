use crate::cli::support::{mazegraph_in, setup_fixtures, write_file};
use predicates::prelude::*;

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_config_in_working_directory_sets_algorithm() {
    let dir = setup_fixtures();
    write_file(
        dir.path(),
        "mazegraph.toml",
        "[traversal]\nalgorithm = \"bfs\"\n",
    );

    mazegraph_in(&dir)
        .args(["run", "A", "D", "--graph", "graph.toml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bfs begun\n"));
}

#[test]
fn test_algorithm_flag_overrides_config() {
    let dir = setup_fixtures();
    write_file(
        dir.path(),
        "mazegraph.toml",
        "[traversal]\nalgorithm = \"bfs\"\n",
    );

    mazegraph_in(&dir)
        .args(["run", "A", "D", "--graph", "graph.toml", "-a", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dfs begun\n"));
}

#[test]
fn test_explicit_config_graph_defaults() {
    let dir = setup_fixtures();
    write_file(
        dir.path(),
        "custom.toml",
        "[graph]\nbidirectional = true\ndefault_weight = 9\n",
    );
    write_file(
        dir.path(),
        "plain.toml",
        "vertices = [\"P\", \"Q\", \"R\"]\n\n\
         [[edges]]\nfrom = \"P\"\nto = \"Q\"\n\n\
         [[edges]]\nfrom = \"Q\"\nto = \"R\"\nweight = 2\nbidirectional = false\n",
    );

    // P -> Q carries no weight and takes the default, mirror included
    for (from, to) in [("P", "Q"), ("Q", "P")] {
        mazegraph_in(&dir)
            .args([
                "--config",
                "custom.toml",
                "weight",
                from,
                to,
                "--graph",
                "plain.toml",
            ])
            .assert()
            .success()
            .stdout("9\n");
    }

    mazegraph_in(&dir)
        .args([
            "--config",
            "custom.toml",
            "weight",
            "R",
            "Q",
            "--graph",
            "plain.toml",
        ])
        .assert()
        .success()
        .stdout("none\n");
}

#[test]
fn test_graph_defaults_without_config() {
    let dir = setup_fixtures();
    write_file(
        dir.path(),
        "plain.toml",
        "vertices = [\"P\", \"Q\"]\n\n[[edges]]\nfrom = \"P\"\nto = \"Q\"\n",
    );

    mazegraph_in(&dir)
        .args(["weight", "Q", "P", "--graph", "plain.toml"])
        .assert()
        .success()
        .stdout("none\n");
}

#[test]
fn test_config_env_var() {
    let dir = setup_fixtures();
    write_file(
        dir.path(),
        "env.toml",
        "[traversal]\nalgorithm = \"dfs\"\n",
    );

    mazegraph_in(&dir)
        .env("MAZEGRAPH_CONFIG", dir.path().join("env.toml"))
        .args(["run", "A", "D", "--graph", "graph.toml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dfs begun\n"));
}

#[test]
fn test_unsupported_config_version_is_usage_error() {
    let dir = setup_fixtures();
    write_file(dir.path(), "mazegraph.toml", "version = 7\n");

    mazegraph_in(&dir)
        .args(["info", "--graph", "graph.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid config version"));
}

#[test]
fn test_malformed_config_is_failure() {
    let dir = setup_fixtures();
    write_file(dir.path(), "mazegraph.toml", "[traversal\n");

    mazegraph_in(&dir)
        .args(["info", "--graph", "graph.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
