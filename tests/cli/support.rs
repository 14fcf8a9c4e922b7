use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A -> B (1), A -> C (4), B -> C (2), B -> D (5), C -> D (1), plus an
/// isolated Z
pub const DIAMOND: &str = r#"
vertices = ["A", "B", "C", "D", "Z"]

[[edges]]
from = "A"
to = "B"
weight = 1

[[edges]]
from = "A"
to = "C"
weight = 4

[[edges]]
from = "B"
to = "C"
weight = 2

[[edges]]
from = "B"
to = "D"
weight = 5

[[edges]]
from = "C"
to = "D"
weight = 1
"#;

pub const MAZE: &str = "\
+-+-+-+
|1 2|3|
+ +-+ +
|4 5 6|
+-+-+-+
";

/// Get a Command for mazegraph, isolated from the caller's logging and
/// configuration environment
pub fn mazegraph() -> Command {
    let mut cmd = cargo_bin_cmd!("mazegraph");
    cmd.env_remove("RUST_LOG")
        .env_remove("MAZEGRAPH_LOG")
        .env_remove("MAZEGRAPH_CONFIG");
    cmd
}

/// Write `content` to `name` inside `dir` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Temporary directory holding `graph.toml` (the diamond) and `sample.maze`
pub fn setup_fixtures() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "graph.toml", DIAMOND);
    write_file(dir.path(), "sample.maze", MAZE);
    dir
}

/// Command rooted in `dir`
pub fn mazegraph_in(dir: &TempDir) -> Command {
    let mut cmd = mazegraph();
    cmd.current_dir(dir.path());
    cmd
}
