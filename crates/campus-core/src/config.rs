//! Navigator configuration
//!
//! Configuration is read from a TOML file given with `--config`, or from
//! `campus.toml` in the working directory when present.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{CampusError, Result};
use crate::graph::CampusGraph;

pub use types::{
    CampusConfig, EdgeConfig, GraphConfig, OutputConfig, SeedKind, CONFIG_FILE,
    CONFIG_FORMAT_VERSION,
};

impl CampusConfig {
    /// Load configuration from a file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CampusConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            return Err(CampusError::invalid_value(
                "config version",
                format!(
                    "{} (newest supported is {})",
                    config.version, CONFIG_FORMAT_VERSION
                ),
            ));
        }

        tracing::debug!(
            seed = ?config.graph.seed,
            extra_locations = config.graph.locations.len(),
            extra_edges = config.graph.edges.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CampusError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load `campus.toml` from `dir`, or defaults when there is none
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Build the graph this config describes.
    ///
    /// Any rejected extra location or edge fails the whole build.
    pub fn build_graph(&self) -> Result<CampusGraph> {
        let mut graph = match self.graph.seed {
            SeedKind::Campus => CampusGraph::seeded(),
            SeedKind::Empty => CampusGraph::new(),
        };
        for name in &self.graph.locations {
            graph.add_location(name)?;
        }
        for edge in &self.graph.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        Ok(graph)
    }
}
