//! Configuration for mazegraph
//!
//! Configuration is read from `mazegraph.toml`. Every key is optional.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::Weight;

pub use types::{
    GraphDefaults, MazegraphConfig, TraversalConfig, CONFIG_FILE_NAME, CONFIG_FORMAT_VERSION,
};

impl MazegraphConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: MazegraphConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load `mazegraph.toml` from `dir`, or fall back to defaults when absent
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject unsupported versions and invalid default weights
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        Weight::try_from(self.graph.default_weight)?;
        Ok(())
    }
}
