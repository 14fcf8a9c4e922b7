//! Configuration type definitions

use crate::graph::Algorithm;
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Name of the configuration file looked up by [`MazegraphConfig::discover`]
///
/// [`MazegraphConfig::discover`]: super::MazegraphConfig::discover
pub const CONFIG_FILE_NAME: &str = "mazegraph.toml";

/// Top-level mazegraph configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazegraphConfig {
    /// Configuration format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Traversal defaults
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Defaults applied when building graphs from description files
    #[serde(default)]
    pub graph: GraphDefaults,
}

impl Default for MazegraphConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            traversal: TraversalConfig::default(),
            graph: GraphDefaults::default(),
        }
    }
}

/// Traversal defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Algorithm used when the command line does not pick one
    #[serde(default)]
    pub algorithm: Algorithm,
}

/// Graph building defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefaults {
    /// Add the reverse of every edge
    #[serde(default)]
    pub bidirectional: bool,

    /// Weight for edges that do not specify one
    #[serde(default = "default_weight")]
    pub default_weight: i64,
}

impl Default for GraphDefaults {
    fn default() -> Self {
        Self {
            bidirectional: false,
            default_weight: default_weight(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_weight() -> i64 {
    1
}
