//! `campus locations`: every location with its outgoing edges

use serde::Serialize;

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use campus_core::error::Result;
use campus_core::graph::{CampusGraph, Weight};
use campus_core::records::quoted;

#[derive(Debug, Serialize)]
struct NeighborEntry<'a> {
    to: &'a str,
    weight: Weight,
}

#[derive(Debug, Serialize)]
struct LocationEntry<'a> {
    index: usize,
    name: &'a str,
    neighbors: Vec<NeighborEntry<'a>>,
}

fn collect_entries(graph: &CampusGraph) -> Vec<LocationEntry<'_>> {
    graph
        .locations()
        .iter()
        .map(|location| LocationEntry {
            index: location.index,
            name: &location.name,
            neighbors: graph
                .neighbors(location.index)
                .filter_map(|edge| {
                    graph.name_of(edge.to).map(|to| NeighborEntry {
                        to,
                        weight: edge.weight,
                    })
                })
                .collect(),
        })
        .collect()
}

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.campus.graph();
    let entries = collect_entries(graph);
    tracing::debug!(elapsed = ?ctx.start.elapsed(), locations = entries.len(), "locations");

    output_by_format_result!(ctx.format,
        json => output_json(graph, &entries),
        human => { output_human(ctx, &entries); },
        records => { output_records(graph, &entries); }
    )
}

fn output_json(graph: &CampusGraph, entries: &[LocationEntry]) -> Result<()> {
    let output = serde_json::json!({
        "count": entries.len(),
        "edge_count": graph.edge_count(),
        "locations": entries,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(ctx: &CommandContext, entries: &[LocationEntry]) {
    if entries.is_empty() {
        if !ctx.cli.quiet {
            println!("No locations");
        }
        return;
    }
    for entry in entries {
        let neighbors: Vec<String> = entry
            .neighbors
            .iter()
            .map(|n| format!("{} ({})", n.to, n.weight))
            .collect();
        if neighbors.is_empty() {
            println!("{:>3}  {}", entry.index, entry.name);
        } else {
            println!(
                "{:>3}  {} -> {}",
                entry.index,
                entry.name,
                neighbors.join(", ")
            );
        }
    }
}

fn output_records(graph: &CampusGraph, entries: &[LocationEntry]) {
    println!(
        "H campus=1 records=1 mode=locations locations={} edges={}",
        entries.len(),
        graph.edge_count()
    );
    for entry in entries {
        println!("N {} {}", entry.index, quoted(entry.name));
    }
    // each undirected edge once, from its lower-index end
    for location in graph.locations() {
        for edge in graph.neighbors(location.index) {
            if edge.to < location.index {
                continue;
            }
            if let Some(to) = graph.name_of(edge.to) {
                println!("E {} {} {}", quoted(&location.name), quoted(to), edge.weight);
            }
        }
    }
}
