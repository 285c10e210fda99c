//! Demonstration campus map
//!
//! Gate reaches Library in two hops through Admin (cost 24) or in three
//! through Ground and Cafeteria (cost 9), so BFS and Dijkstra disagree.

use super::CampusGraph;

pub const CAMPUS_LOCATIONS: [&str; 9] = [
    "Gate",
    "Admin",
    "Library",
    "Cafeteria",
    "Block-A",
    "Block-B",
    "Lab",
    "Ground",
    "Hostel",
];

pub const CAMPUS_EDGES: [(&str, &str, i64); 11] = [
    ("Gate", "Admin", 12),
    ("Admin", "Library", 12),
    ("Gate", "Ground", 3),
    ("Ground", "Cafeteria", 3),
    ("Cafeteria", "Library", 3),
    ("Admin", "Block-A", 4),
    ("Admin", "Block-B", 6),
    ("Block-A", "Lab", 3),
    ("Block-B", "Lab", 2),
    ("Ground", "Hostel", 4),
    ("Lab", "Hostel", 5),
];

/// Add the demonstration locations and edges to `graph`.
///
/// Entries that collide with what `graph` already holds are skipped.
pub fn seed_campus(graph: &mut CampusGraph) {
    for name in CAMPUS_LOCATIONS {
        if let Err(err) = graph.add_location(name) {
            tracing::debug!(%err, "seed location skipped");
        }
    }
    for (a, b, weight) in CAMPUS_EDGES {
        if let Err(err) = graph.add_edge(a, b, weight) {
            tracing::debug!(%err, "seed edge skipped");
        }
    }
}
