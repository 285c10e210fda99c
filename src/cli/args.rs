//! Per-command argument structs

use campus_core::graph::Algorithm;
use clap::Args;

use super::parse::parse_algorithm;

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Starting location
    pub from: String,

    /// Destination location
    pub to: String,

    /// Search to run: bfs (fewest hops) or dijkstra (lowest cost)
    #[arg(long, short, default_value = "dijkstra", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Starting location
    pub from: String,

    /// Destination location
    pub to: String,
}

#[derive(Args, Debug, Clone)]
pub struct DivergenceArgs {
    /// List every diverged pair
    #[arg(long)]
    pub pairs: bool,
}
