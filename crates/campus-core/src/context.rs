//! Per-session navigator state
//!
//! A `CampusContext` owns the graph and the configuration it was built from.
//! Callers construct one explicitly and pass it by reference.

use crate::config::CampusConfig;
use crate::error::Result;
use crate::graph::CampusGraph;

#[derive(Debug, Clone)]
pub struct CampusContext {
    graph: CampusGraph,
    config: CampusConfig,
}

impl CampusContext {
    /// Build the graph described by `config`.
    ///
    /// Fails if any configured location or edge is rejected.
    pub fn new(config: CampusConfig) -> Result<Self> {
        let graph = config.build_graph()?;
        tracing::debug!(
            locations = graph.location_count(),
            edges = graph.edge_count(),
            "context ready"
        );
        Ok(Self { graph, config })
    }

    /// Wrap an already-built graph with default configuration
    pub fn with_graph(graph: CampusGraph) -> Self {
        Self {
            graph,
            config: CampusConfig::default(),
        }
    }

    pub fn graph(&self) -> &CampusGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut CampusGraph {
        &mut self.graph
    }

    pub fn config(&self) -> &CampusConfig {
        &self.config
    }
}
