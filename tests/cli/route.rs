use crate::cli::support::{campus_in, dir_with_config, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Route command tests
// ============================================================================

#[test]
fn test_route_defaults_to_dijkstra() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["route", "Gate", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dijkstra: Gate -> Ground -> Cafeteria -> Library",
        ))
        .stdout(predicate::str::contains("Hops: 3  Cost: 9"))
        .stdout(predicate::str::contains("Edge weights: 3, 3, 3"))
        .stdout(predicate::str::contains("Visited: Gate, Ground, Cafeteria, Hostel, Library"));
}

#[test]
fn test_route_bfs_takes_fewest_hops() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["route", "Gate", "Library", "--algorithm", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS: Gate -> Admin -> Library"))
        .stdout(predicate::str::contains("Hops: 2  Cost: 24"));
}

#[test]
fn test_route_quiet_omits_details() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["--quiet", "route", "Gate", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hops: 3"))
        .stdout(predicate::str::contains("Visited").not());
}

#[test]
fn test_route_same_location() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["route", "Lab", "Lab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dijkstra: Lab"))
        .stdout(predicate::str::contains("Hops: 0  Cost: 0"));
}

#[test]
fn test_route_json() {
    let dir = tempdir().unwrap();
    let output = campus_in(dir.path())
        .args(["--format", "json", "route", "Gate", "Library", "-a", "bfs"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["algorithm"], "BFS");
    assert_eq!(json["path"], serde_json::json!(["Gate", "Admin", "Library"]));
    assert_eq!(json["hops"], 2);
    assert_eq!(json["cost"], 24);
    assert_eq!(json["edge_weights"], serde_json::json!([12, 12]));
    assert_eq!(
        json["visited_order"],
        serde_json::json!(["Gate", "Admin", "Ground", "Library"])
    );
}

#[test]
fn test_route_records() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["--format", "records", "route", "Gate", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"H campus=1 records=1 mode=route algorithm=Dijkstra from="Gate" to="Library" found=true hops=3 cost=9"#,
        ))
        .stdout(predicate::str::contains(r#"N 0 "Gate""#))
        .stdout(predicate::str::contains(r#"E "Gate" "Ground" 3"#))
        .stdout(predicate::str::contains(r#"V 4 "Library""#));
}

#[test]
fn test_route_disconnected_pair_is_not_an_error() {
    let dir = dir_with_config(
        r#"
[graph]
seed = "empty"
locations = ["North", "South"]
"#,
    );

    campus_in(dir.path())
        .args(["route", "North", "South"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No route found from North to South"));

    let output = campus_in(dir.path())
        .args(["--format", "json", "route", "North", "South"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["hops"], -1);
    assert_eq!(json["cost"], -1);
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_route_unknown_location_exit_code_3() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["route", "Gate", "Moon"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("location not found: Moon"));
}

#[test]
fn test_route_unknown_location_json_error() {
    let dir = tempdir().unwrap();
    let output = campus_in(dir.path())
        .args(["--format", "json", "route", "Moon", "Gate"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "unknown_location");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_route_records_quote_names_with_spaces() {
    let dir = dir_with_config(
        r#"
[graph]
locations = ["Hostel B", "The \"Quad\""]

[[graph.edges]]
from = "Hostel"
to = "Hostel B"
weight = 2

[[graph.edges]]
from = "Hostel B"
to = "The \"Quad\""
weight = 1
"#,
    );

    let output = campus_in(dir.path())
        .args(["--format", "records", "route", "Hostel", "The \"Quad\""])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].contains(r#"from="Hostel" to="The \"Quad\"" found=true hops=2 cost=3"#));
    assert!(lines.contains(&r#"N 1 "Hostel B""#));
    assert!(lines.contains(&r#"E "Hostel" "Hostel B" 2"#));
    assert!(lines.contains(&r#"E "Hostel B" "The \"Quad\"" 1"#));
}
