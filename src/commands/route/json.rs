use super::Route;
use campus_core::error::Result;

/// JSON object for one route; shared with `compare`
pub fn route_json(route: &Route) -> serde_json::Value {
    let result = &route.result;
    serde_json::json!({
        "found": result.is_found(),
        "algorithm": result.algorithm,
        "from": route.from,
        "to": route.to,
        "path": result.path,
        "hops": result.hops,
        "cost": result.cost,
        "edge_weights": route.edge_weights,
        "visited_order": result.visited_order,
    })
}

/// Output a route in JSON format
pub fn output_route(route: &Route) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&route_json(route))?);
    Ok(())
}
