//! Hand-built containers backing the graph and its search frontiers
//!
//! - `index_map`: open-addressing string map for name resolution
//! - `adjacency`: arena-backed append-only linked adjacency lists
//! - `heap`: binary min-heap with a caller-supplied ordering (Dijkstra frontier)
//! - `queue`: circular-buffer FIFO (BFS frontier)

pub mod adjacency;
pub mod heap;
pub mod index_map;
pub mod queue;

pub use adjacency::{AdjacencyArena, AdjacencyList};
pub use heap::MinHeap;
pub use index_map::StringIndexMap;
pub use queue::Queue;
