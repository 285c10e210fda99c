//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first search for fewest-hop paths
//! - `dijkstra`: Weighted shortest path finding
//! - `shared`: Path reconstruction and costing used by both

pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::bfs_shortest_path;
pub use dijkstra::dijkstra_shortest_path;
