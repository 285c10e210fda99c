//! `campus route`: one algorithm between two locations

pub mod human;
pub mod json;
pub mod records;

use crate::cli::RouteArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use campus_core::error::{CampusError, Result};
use campus_core::graph::{CampusGraph, PathResult, Weight};

/// A path result together with the endpoints asked for and per-hop weights
#[derive(Debug)]
pub struct Route<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub result: PathResult,
    pub edge_weights: Vec<Weight>,
}

impl<'a> Route<'a> {
    pub fn new(graph: &CampusGraph, from: &'a str, to: &'a str, result: PathResult) -> Self {
        let edge_weights = graph.path_edge_weights(&result);
        Self {
            from,
            to,
            result,
            edge_weights,
        }
    }
}

/// Reject names the graph does not know before searching
pub fn require_locations(graph: &CampusGraph, names: &[&str]) -> Result<()> {
    for name in names {
        if graph.resolve(name).is_none() {
            return Err(CampusError::unknown_location(*name));
        }
    }
    Ok(())
}

pub fn execute(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let graph = ctx.campus.graph();
    require_locations(graph, &[args.from.as_str(), args.to.as_str()])?;

    let result = graph.shortest_path(args.algorithm, &args.from, &args.to);
    tracing::debug!(
        elapsed = ?ctx.start.elapsed(),
        algorithm = %args.algorithm,
        found = result.is_found(),
        "route"
    );
    let route = Route::new(graph, &args.from, &args.to, result);

    output_by_format_result!(ctx.format,
        json => json::output_route(&route),
        human => { human::output_route(ctx.cli, &route); },
        records => { records::output_route(&route); }
    )
}
