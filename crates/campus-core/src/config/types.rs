//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graph::Weight;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// File name looked up by [`super::CampusConfig::discover`]
pub const CONFIG_FILE: &str = "campus.toml";

/// Navigator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Graph construction
    #[serde(default)]
    pub graph: GraphConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            graph: GraphConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Which built-in map to start from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedKind {
    /// The demonstration campus map
    #[default]
    Campus,
    /// No locations at all
    Empty,
}

/// Graph section: seed, then extra locations, then extra edges
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub seed: SeedKind,

    /// Locations appended after seeding, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,

    /// Edges added after the extra locations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format; `--format` overrides
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}
