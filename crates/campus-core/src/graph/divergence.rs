//! All-pairs comparison of BFS and Dijkstra
//!
//! Runs both single-pair searches for every unordered location pair and
//! counts the pairs where BFS's route has fewer stops but costs more.

use std::time::Instant;

use crate::graph::algos::bfs::bfs_between;
use crate::graph::algos::dijkstra::dijkstra_between;
use crate::graph::types::{DivergedPair, DivergenceReport, DivergenceStats, PathResult};
use crate::graph::CampusGraph;
use crate::trace_time;

/// Whether a BFS/Dijkstra result pair counts as diverged.
///
/// All three must hold: the paths differ, BFS has strictly fewer hops, and
/// BFS costs strictly more. Equal-hop or equal-cost disagreements are not
/// counted.
pub fn is_diverged(bfs: &PathResult, dijkstra: &PathResult) -> bool {
    bfs.is_found()
        && dijkstra.is_found()
        && bfs.path != dijkstra.path
        && bfs.hops < dijkstra.hops
        && bfs.cost > dijkstra.cost
}

/// Scan every pair `(i, j)` with `i < j`.
///
/// `total_pairs` counts every pair considered; pairs where either search
/// finds no path are skipped before the divergence check.
#[tracing::instrument(skip(graph), fields(nodes = graph.location_count()))]
pub fn divergence_report(graph: &CampusGraph) -> DivergenceReport {
    let start = Instant::now();
    let n = graph.location_count();
    let mut total = 0;
    let mut skipped = 0;
    let mut pairs = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            total += 1;
            let bfs = bfs_between(graph, i, j);
            let dijkstra = dijkstra_between(graph, i, j);
            if !bfs.is_found() || !dijkstra.is_found() {
                skipped += 1;
                continue;
            }
            if is_diverged(&bfs, &dijkstra) {
                pairs.push(DivergedPair {
                    from: graph.locations()[i].name.clone(),
                    to: graph.locations()[j].name.clone(),
                    bfs_hops: bfs.hops,
                    bfs_cost: bfs.cost,
                    dijkstra_hops: dijkstra.hops,
                    dijkstra_cost: dijkstra.cost,
                });
            }
        }
    }

    let stats = DivergenceStats::new(total, pairs.len());
    trace_time!(start, "divergence_scan", total_pairs = total);
    tracing::debug!(
        total_pairs = stats.total_pairs,
        diverged_pairs = stats.diverged_pairs,
        skipped_pairs = skipped,
        percent = stats.percent,
        "divergence scan complete"
    );

    DivergenceReport {
        stats,
        skipped_pairs: skipped,
        pairs,
    }
}

/// Stats projection of [`divergence_report`]
pub fn divergence_stats(graph: &CampusGraph) -> DivergenceStats {
    divergence_report(graph).stats
}
