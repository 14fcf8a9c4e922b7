//! Graph description files
//!
//! A document lists vertices and directed edges, in TOML or JSON:
//!
//! ```toml
//! vertices = ["A", "B"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! weight = 3
//! bidirectional = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::GraphDefaults;
use crate::error::{GraphError, Result};
use crate::graph::store::WeightedGraph;

/// One edge entry of a graph document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,

    /// Falls back to the configured default weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,

    /// Also add `to -> from`; falls back to the configured default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidirectional: Option<bool>,
}

/// Serialized description of a graph with string vertices
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub vertices: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    /// Load a document, picking the parser from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            other => Err(GraphError::InvalidDocument {
                reason: format!(
                    "unsupported graph file extension {:?} (expected .toml or .json)",
                    other.unwrap_or("")
                ),
            }),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build the graph: vertices first, then edges, both in file order.
    ///
    /// Any rejected vertex or edge aborts the build with the graph store's
    /// own error.
    pub fn into_graph(self, defaults: &GraphDefaults) -> Result<WeightedGraph<String>> {
        let mut graph = WeightedGraph::new();

        for vertex in self.vertices {
            graph.add_vertex(vertex)?;
        }

        for edge in &self.edges {
            let weight = edge.weight.unwrap_or(defaults.default_weight);
            graph.add_edge(&edge.from, &edge.to, weight)?;
            if edge.bidirectional.unwrap_or(defaults.bidirectional) {
                graph.add_edge(&edge.to, &edge.from, weight)?;
            }
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph document loaded"
        );
        Ok(graph)
    }
}
