use crate::collections::MinHeap;
use crate::graph::algos::shared::{build_result, reconstruct_path, resolve_endpoints};
use crate::graph::types::{Algorithm, PathResult, Weight};
use crate::graph::CampusGraph;

/// Frontier entry: tentative distance to `node` when it was pushed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeDistance {
    pub distance: Weight,
    pub node: usize,
}

fn closer(a: &NodeDistance, b: &NodeDistance) -> bool {
    a.distance < b.distance
}

/// Find the minimum total-weight path between two named locations.
#[tracing::instrument(level = "debug", skip(graph), fields(nodes = graph.location_count()))]
pub fn dijkstra_shortest_path(graph: &CampusGraph, src: &str, dst: &str) -> PathResult {
    match resolve_endpoints(graph, src, dst) {
        Some((source, target)) => dijkstra_between(graph, source, target),
        None => {
            tracing::debug!("endpoint did not resolve");
            PathResult::unreachable(Algorithm::Dijkstra)
        }
    }
}

/// Dijkstra between two valid indices.
///
/// Improved distances are pushed as new heap entries; an entry popped for an
/// already settled node is stale and skipped. A node with no distance has
/// not been reached.
pub(crate) fn dijkstra_between(graph: &CampusGraph, source: usize, target: usize) -> PathResult {
    let n = graph.location_count();
    let mut distances: Vec<Option<Weight>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut visited_order = Vec::new();

    let mut frontier = MinHeap::new(closer);
    distances[source] = Some(0);
    frontier.push(NodeDistance {
        distance: 0,
        node: source,
    });

    while let Some(NodeDistance {
        distance,
        node: current,
    }) = frontier.pop_min()
    {
        if settled[current] {
            continue;
        }
        settled[current] = true;
        visited_order.push(current);
        if current == target {
            break;
        }

        for edge in graph.adjacent(current) {
            let candidate = distance.saturating_add(edge.weight);
            if distances[edge.to].map_or(true, |known| candidate < known) {
                distances[edge.to] = Some(candidate);
                predecessors[edge.to] = Some(current);
                frontier.push(NodeDistance {
                    distance: candidate,
                    node: edge.to,
                });
            }
        }
    }

    let visited_names = graph.names_for(&visited_order);
    let Some(cost) = distances[target] else {
        return PathResult {
            visited_order: visited_names,
            ..PathResult::unreachable(Algorithm::Dijkstra)
        };
    };

    let path = reconstruct_path(&predecessors, target);
    build_result(graph, Algorithm::Dijkstra, &path, cost, visited_names)
}
