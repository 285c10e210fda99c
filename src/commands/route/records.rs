use super::Route;
use campus_core::records::quoted;

/// Body lines for one route: `N` per path stop, `E` per hop, `V` per visit
pub fn route_lines(route: &Route) -> Vec<String> {
    let result = &route.result;
    let mut lines = Vec::new();
    for (step, name) in result.path.iter().enumerate() {
        lines.push(format!("N {} {}", step, quoted(name)));
    }
    for (hop, weight) in result.path.windows(2).zip(&route.edge_weights) {
        lines.push(format!("E {} {} {}", quoted(&hop[0]), quoted(&hop[1]), weight));
    }
    for (order, name) in result.visited_order.iter().enumerate() {
        lines.push(format!("V {} {}", order, quoted(name)));
    }
    lines
}

/// Output a route in records format
pub fn output_route(route: &Route) {
    let result = &route.result;
    println!(
        "H campus=1 records=1 mode=route algorithm={} from={} to={} found={} hops={} cost={}",
        result.algorithm,
        quoted(route.from),
        quoted(route.to),
        result.is_found(),
        result.hops,
        result.cost
    );
    for line in route_lines(route) {
        println!("{}", line);
    }
}
