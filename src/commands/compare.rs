//! `campus compare`: BFS and Dijkstra side by side for one pair

use crate::cli::{Cli, CompareArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::route::{self, require_locations, Route};
use crate::output_by_format_result;
use campus_core::error::Result;
use campus_core::graph::is_diverged;
use campus_core::records::quoted;

pub fn execute(ctx: &CommandContext, args: &CompareArgs) -> Result<()> {
    let graph = ctx.campus.graph();
    let (from, to) = (args.from.as_str(), args.to.as_str());
    require_locations(graph, &[from, to])?;

    let bfs = Route::new(graph, from, to, graph.bfs_shortest_path(from, to));
    let dijkstra = Route::new(graph, from, to, graph.dijkstra_shortest_path(from, to));
    let diverged = is_diverged(&bfs.result, &dijkstra.result);
    tracing::debug!(elapsed = ?ctx.start.elapsed(), diverged, "compare");

    output_by_format_result!(ctx.format,
        json => output_json(from, to, &bfs, &dijkstra, diverged),
        human => { output_human(ctx.cli, &bfs, &dijkstra, diverged); },
        records => { output_records(from, to, &bfs, &dijkstra, diverged); }
    )
}

fn output_json(from: &str, to: &str, bfs: &Route, dijkstra: &Route, diverged: bool) -> Result<()> {
    let output = serde_json::json!({
        "from": from,
        "to": to,
        "diverged": diverged,
        "bfs": route::json::route_json(bfs),
        "dijkstra": route::json::route_json(dijkstra),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(cli: &Cli, bfs: &Route, dijkstra: &Route, diverged: bool) {
    route::human::output_route(cli, bfs);
    if !cli.quiet {
        println!();
    }
    route::human::output_route(cli, dijkstra);
    if !cli.quiet {
        println!();
    }
    if diverged {
        println!(
            "Diverged: BFS takes {} fewer hop(s) but costs {} more",
            dijkstra.result.hops - bfs.result.hops,
            bfs.result.cost - dijkstra.result.cost
        );
    } else {
        println!("Not diverged");
    }
}

fn output_records(from: &str, to: &str, bfs: &Route, dijkstra: &Route, diverged: bool) {
    println!(
        "H campus=1 records=1 mode=compare from={} to={} diverged={}",
        quoted(from),
        quoted(to),
        diverged
    );
    for entry in [bfs, dijkstra] {
        let result = &entry.result;
        println!(
            "A {} found={} hops={} cost={}",
            result.algorithm,
            result.is_found(),
            result.hops,
            result.cost
        );
        for line in route::records::route_lines(entry) {
            println!("{}", line);
        }
    }
}
