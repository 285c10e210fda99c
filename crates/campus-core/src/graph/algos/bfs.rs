use crate::collections::Queue;
use crate::graph::algos::shared::{build_result, path_cost, reconstruct_path, resolve_endpoints};
use crate::graph::types::{Algorithm, PathResult};
use crate::graph::CampusGraph;

/// Find the path with the fewest edges between two named locations.
///
/// Weights are ignored while searching; the returned `cost` is summed over
/// the chosen path afterwards, so it may exceed what Dijkstra reports for
/// the same pair. Ties between equally short paths go to whichever neighbor
/// was inserted first.
#[tracing::instrument(level = "debug", skip(graph), fields(nodes = graph.location_count()))]
pub fn bfs_shortest_path(graph: &CampusGraph, src: &str, dst: &str) -> PathResult {
    match resolve_endpoints(graph, src, dst) {
        Some((source, target)) => bfs_between(graph, source, target),
        None => {
            tracing::debug!("endpoint did not resolve");
            PathResult::unreachable(Algorithm::Bfs)
        }
    }
}

/// BFS between two valid indices
pub(crate) fn bfs_between(graph: &CampusGraph, source: usize, target: usize) -> PathResult {
    let n = graph.location_count();
    let mut visited = vec![false; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut hops = vec![0usize; n];
    let mut visited_order = Vec::new();

    let mut queue = Queue::new();
    queue.push(source);
    visited[source] = true;

    while let Some(current) = queue.pop() {
        visited_order.push(current);
        if current == target {
            break;
        }
        for edge in graph.adjacent(current) {
            if !visited[edge.to] {
                visited[edge.to] = true;
                predecessors[edge.to] = Some(current);
                hops[edge.to] = hops[current] + 1;
                queue.push(edge.to);
            }
        }
    }

    let visited_names = graph.names_for(&visited_order);
    if !visited[target] {
        return PathResult {
            visited_order: visited_names,
            ..PathResult::unreachable(Algorithm::Bfs)
        };
    }

    let path = reconstruct_path(&predecessors, target);
    debug_assert_eq!(path.len() - 1, hops[target]);
    let cost = path_cost(graph, &path);
    build_result(graph, Algorithm::Bfs, &path, cost, visited_names)
}
