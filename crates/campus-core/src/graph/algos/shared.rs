use crate::graph::types::{Algorithm, PathResult, Weight};
use crate::graph::CampusGraph;

/// Resolve both endpoints, or `None` if either name is unknown
pub fn resolve_endpoints(graph: &CampusGraph, src: &str, dst: &str) -> Option<(usize, usize)> {
    Some((graph.resolve(src)?, graph.resolve(dst)?))
}

/// Walk the predecessor chain from `target` back to its root, then reverse.
pub fn reconstruct_path(predecessors: &[Option<usize>], target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(pred) = predecessors[current] {
        path.push(pred);
        current = pred;
    }
    path.reverse();
    path
}

/// Sum of the first-matching edge weight for each consecutive hop
pub fn path_cost(graph: &CampusGraph, path: &[usize]) -> Weight {
    path.windows(2)
        .map(|hop| graph.edge_weight(hop[0], hop[1]).unwrap_or(0))
        .fold(0, Weight::saturating_add)
}

/// Assemble a found result from an index path
pub fn build_result(
    graph: &CampusGraph,
    algorithm: Algorithm,
    path: &[usize],
    cost: Weight,
    visited_order: Vec<String>,
) -> PathResult {
    PathResult {
        path: graph.names_for(path),
        hops: path.len() as i64 - 1,
        cost,
        algorithm,
        visited_order,
    }
}
