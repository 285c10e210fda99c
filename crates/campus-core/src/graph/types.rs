use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CampusError;

/// Edge weight and accumulated path cost
pub type Weight = i64;

/// Largest accepted edge weight; keeps path sums far from `i64` overflow
pub const MAX_EDGE_WEIGHT: Weight = i32::MAX as Weight;

/// Sentinel reported for hops and cost when no path exists
pub const UNREACHABLE: i64 = -1;

/// A named location with its dense, never-reused index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub name: String,
    pub index: usize,
}

/// One directed half of an undirected edge, stored in the source's adjacency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub to: usize,
    pub weight: Weight,
}

/// Which search produced a [`PathResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    #[serde(rename = "BFS")]
    Bfs,
    #[serde(rename = "Dijkstra")]
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dijkstra];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dijkstra => "Dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(CampusError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Outcome of a single-pair shortest-path query.
///
/// When no path exists (unknown endpoint or disconnected pair) `path` is
/// empty and both `hops` and `cost` are [`UNREACHABLE`]; `algorithm` is
/// always set and `visited_order` still records what the search touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub path: Vec<String>,
    pub hops: i64,
    pub cost: Weight,
    pub algorithm: Algorithm,
    pub visited_order: Vec<String>,
}

impl PathResult {
    pub fn unreachable(algorithm: Algorithm) -> Self {
        Self {
            path: Vec::new(),
            hops: UNREACHABLE,
            cost: UNREACHABLE,
            algorithm,
            visited_order: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Aggregate of the all-pairs BFS/Dijkstra comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DivergenceStats {
    /// Unordered pairs considered, reachable or not
    pub total_pairs: usize,
    /// Pairs where BFS took fewer hops at a strictly higher cost
    pub diverged_pairs: usize,
    /// `diverged_pairs * 100 / total_pairs`, truncated; 0 for an empty scan
    pub percent: usize,
}

impl DivergenceStats {
    pub fn new(total_pairs: usize, diverged_pairs: usize) -> Self {
        let percent = if total_pairs == 0 {
            0
        } else {
            diverged_pairs * 100 / total_pairs
        };
        Self {
            total_pairs,
            diverged_pairs,
            percent,
        }
    }
}

/// A pair counted as diverged, with both algorithms' metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivergedPair {
    pub from: String,
    pub to: String,
    pub bfs_hops: i64,
    pub bfs_cost: Weight,
    pub dijkstra_hops: i64,
    pub dijkstra_cost: Weight,
}

/// Full divergence scan: stats plus the pairs behind them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DivergenceReport {
    #[serde(flatten)]
    pub stats: DivergenceStats,
    /// Pairs skipped because at least one search found no path
    pub skipped_pairs: usize,
    pub pairs: Vec<DivergedPair>,
}
