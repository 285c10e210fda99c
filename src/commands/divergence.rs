//! `campus divergence`: all-pairs BFS/Dijkstra disagreement

use crate::cli::DivergenceArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use campus_core::error::Result;
use campus_core::graph::DivergenceReport;
use campus_core::records::quoted;

pub fn execute(ctx: &CommandContext, args: &DivergenceArgs) -> Result<()> {
    let report = ctx.campus.graph().divergence_report();
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "divergence");

    output_by_format_result!(ctx.format,
        json => output_json(&report, args.pairs),
        human => { output_human(&report, args.pairs); },
        records => { output_records(&report, args.pairs); }
    )
}

fn output_json(report: &DivergenceReport, with_pairs: bool) -> Result<()> {
    let mut output = serde_json::to_value(report)?;
    if !with_pairs {
        if let Some(obj) = output.as_object_mut() {
            obj.remove("pairs");
        }
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(report: &DivergenceReport, with_pairs: bool) {
    let stats = &report.stats;
    println!(
        "{} of {} pairs diverged ({}%)",
        stats.diverged_pairs, stats.total_pairs, stats.percent
    );
    if report.skipped_pairs > 0 {
        println!("{} pair(s) skipped: no route", report.skipped_pairs);
    }
    if with_pairs {
        for pair in &report.pairs {
            println!(
                "  {} -> {}: BFS {} hops / cost {}, Dijkstra {} hops / cost {}",
                pair.from,
                pair.to,
                pair.bfs_hops,
                pair.bfs_cost,
                pair.dijkstra_hops,
                pair.dijkstra_cost
            );
        }
    }
}

fn output_records(report: &DivergenceReport, with_pairs: bool) {
    let stats = &report.stats;
    println!(
        "H campus=1 records=1 mode=divergence total={} diverged={} percent={} skipped={}",
        stats.total_pairs, stats.diverged_pairs, stats.percent, report.skipped_pairs
    );
    if with_pairs {
        for pair in &report.pairs {
            println!(
                "D {} {} bfs_hops={} bfs_cost={} dijkstra_hops={} dijkstra_cost={}",
                quoted(&pair.from),
                quoted(&pair.to),
                pair.bfs_hops,
                pair.bfs_cost,
                pair.dijkstra_hops,
                pair.dijkstra_cost
            );
        }
    }
}
