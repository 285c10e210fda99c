//! Campus Core Library
//!
//! Pathfinding engine for the campus navigator: a small location graph,
//! BFS and Dijkstra shortest-path queries, and the all-pairs divergence scan.

pub mod collections;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
