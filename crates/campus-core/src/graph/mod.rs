//! Campus location graph and path-finding operations
//!
//! Provides the navigation graph and the algorithms run over it:
//! - `CampusGraph`: append-only undirected weighted graph keyed by name
//! - BFS path-finding for fewest hops
//! - Dijkstra path-finding for lowest total weight
//! - Divergence scan comparing the two over every location pair

pub mod algos;
pub mod divergence;
pub mod seed;
pub mod types;

pub use algos::{bfs, dijkstra};
pub use divergence::{divergence_report, divergence_stats, is_diverged};
pub use types::{
    Algorithm, DivergedPair, DivergenceReport, DivergenceStats, Edge, Location, PathResult,
    Weight, MAX_EDGE_WEIGHT, UNREACHABLE,
};

use tracing::debug;

use crate::collections::{AdjacencyArena, AdjacencyList, StringIndexMap};
use crate::error::{CampusError, Result};

/// Undirected weighted graph of named campus locations.
///
/// Locations get dense indices in insertion order; indices are stable for
/// the graph's lifetime. Every edge is stored as two mirrored halves with
/// equal weight. There is no removal.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    index_of: StringIndexMap<usize>,
    locations: Vec<Location>,
    adjacency: Vec<AdjacencyList>,
    edges: AdjacencyArena<Edge>,
    edge_count: usize,
}

impl CampusGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph pre-populated with the demonstration campus map
    pub fn seeded() -> Self {
        let mut graph = Self::new();
        seed::seed_campus(&mut graph);
        graph
    }

    /// Add a location, returning its new index.
    ///
    /// Rejects a name that already resolves; nothing changes in that case.
    pub fn add_location(&mut self, name: &str) -> Result<usize> {
        if self.index_of.contains(name) {
            debug!(name, "duplicate location rejected");
            return Err(CampusError::DuplicateLocation {
                name: name.to_string(),
            });
        }
        let index = self.locations.len();
        self.locations.push(Location {
            name: name.to_string(),
            index,
        });
        self.adjacency.push(AdjacencyList::new());
        self.index_of.put(name, index);
        debug!(name, index, "location added");
        Ok(index)
    }

    /// Connect `a` and `b` with an undirected edge.
    ///
    /// `weight` must lie in `1..=MAX_EDGE_WEIGHT`. Repeating a pair adds a
    /// parallel edge. Rejections leave the graph untouched.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Weight) -> Result<()> {
        if !(1..=MAX_EDGE_WEIGHT).contains(&weight) {
            debug!(a, b, weight, "out-of-range edge weight rejected");
            return Err(CampusError::InvalidWeight { weight });
        }
        let from = self
            .resolve(a)
            .ok_or_else(|| CampusError::unknown_location(a))?;
        let to = self
            .resolve(b)
            .ok_or_else(|| CampusError::unknown_location(b))?;

        self.edges
            .push_back(&mut self.adjacency[from], Edge { to, weight });
        self.edges.push_back(
            &mut self.adjacency[to],
            Edge {
                to: from,
                weight,
            },
        );
        self.edge_count += 1;
        debug!(a, b, weight, "edge added");
        Ok(())
    }

    /// Look up a location's index by name
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.index_of.get(name).copied()
    }

    /// Name of the location at `index`
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.locations.get(index).map(|l| l.name.as_str())
    }

    /// Locations in insertion (index) order
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location names in insertion (index) order
    pub fn location_names(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|l| l.name.as_str())
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Undirected edges inserted, parallel edges counted separately
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edges leaving `index` in insertion order; empty for an unknown index
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = &Edge> {
        let list = self.adjacency.get(index).copied().unwrap_or_default();
        self.edges.iter(&list)
    }

    /// Weight of the first edge from `from` to `to`.
    ///
    /// Parallel edges are not aggregated; only the earliest inserted counts.
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<Weight> {
        self.neighbors(from)
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    /// Weight of each consecutive hop along `result.path`.
    ///
    /// A hop whose names no longer resolve, or that has no edge, reports 0.
    pub fn path_edge_weights(&self, result: &PathResult) -> Vec<Weight> {
        result
            .path
            .windows(2)
            .map(|hop| {
                match (self.resolve(&hop[0]), self.resolve(&hop[1])) {
                    (Some(from), Some(to)) => self.edge_weight(from, to).unwrap_or(0),
                    _ => 0,
                }
            })
            .collect()
    }

    /// Fewest-hop path between two named locations
    pub fn bfs_shortest_path(&self, src: &str, dst: &str) -> PathResult {
        bfs::bfs_shortest_path(self, src, dst)
    }

    /// Lowest-cost path between two named locations
    pub fn dijkstra_shortest_path(&self, src: &str, dst: &str) -> PathResult {
        dijkstra::dijkstra_shortest_path(self, src, dst)
    }

    /// Run the requested algorithm between two named locations
    pub fn shortest_path(&self, algorithm: Algorithm, src: &str, dst: &str) -> PathResult {
        match algorithm {
            Algorithm::Bfs => self.bfs_shortest_path(src, dst),
            Algorithm::Dijkstra => self.dijkstra_shortest_path(src, dst),
        }
    }

    /// All-pairs BFS/Dijkstra disagreement statistics
    pub fn divergence_stats(&self) -> DivergenceStats {
        divergence_stats(self)
    }

    /// All-pairs scan including the diverged pairs themselves
    pub fn divergence_report(&self) -> DivergenceReport {
        divergence_report(self)
    }

    /// Adjacency of a known-valid index, for the search loops
    pub(crate) fn adjacent(&self, index: usize) -> impl Iterator<Item = &Edge> {
        self.edges.iter(&self.adjacency[index])
    }

    /// Map a sequence of indices to owned names
    pub(crate) fn names_for(&self, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| self.locations[i].name.clone())
            .collect()
    }
}
