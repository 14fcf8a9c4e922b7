//! Error types and exit codes for mazegraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (rejected graph mutation, malformed maze or graph file)

mod macros;

use thiserror::Error;

/// Exit codes for the mazegraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph, maze or document (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during mazegraph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph store errors (exit code 3)
    #[error("duplicate vertex: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("vertex not found in the graph: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("negative or oversized weight not allowed: {weight}")]
    InvalidWeight { weight: i64 },

    #[error("invalid maze at line {line}: {reason}")]
    InvalidMaze { line: usize, reason: String },

    #[error("invalid graph document: {reason}")]
    InvalidDocument { reason: String },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, or dijkstra)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex that is already present
    pub fn duplicate_vertex(vertex: &impl std::fmt::Debug) -> Self {
        GraphError::DuplicateVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a vertex that is not part of the graph
    pub fn unknown_vertex(vertex: &impl std::fmt::Debug) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an invalid maze line
    pub fn invalid_maze(line: usize, reason: impl Into<String>) -> Self {
        GraphError::InvalidMaze {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UnknownAlgorithm(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::DuplicateVertex { .. }
            | GraphError::UnknownVertex { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::InvalidMaze { .. }
            | GraphError::InvalidDocument { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::TomlSer(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::DuplicateVertex { .. } => "duplicate_vertex",
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::InvalidMaze { .. } => "invalid_maze",
            GraphError::InvalidDocument { .. } => "invalid_document",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UnknownAlgorithm(_) => "unknown_algorithm",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) | GraphError::TomlSer(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for mazegraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
