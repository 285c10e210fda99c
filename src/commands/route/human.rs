use super::Route;
use crate::cli::Cli;

/// Output a route in human-readable format
pub fn output_route(cli: &Cli, route: &Route) {
    let result = &route.result;
    if !result.is_found() {
        println!("No route found from {} to {}", route.from, route.to);
        return;
    }

    println!("{}: {}", result.algorithm, result.path.join(" -> "));
    println!("Hops: {}  Cost: {}", result.hops, result.cost);

    if cli.quiet {
        return;
    }
    if !route.edge_weights.is_empty() {
        let weights: Vec<String> = route.edge_weights.iter().map(|w| w.to_string()).collect();
        println!("Edge weights: {}", weights.join(", "));
    }
    println!("Visited: {}", result.visited_order.join(", "));
}
