use crate::cli::support::{campus_in, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Compare command tests
// ============================================================================

#[test]
fn test_compare_reports_divergence() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["compare", "Gate", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS: Gate -> Admin -> Library"))
        .stdout(predicate::str::contains(
            "Dijkstra: Gate -> Ground -> Cafeteria -> Library",
        ))
        .stdout(predicate::str::contains(
            "Diverged: BFS takes 1 fewer hop(s) but costs 15 more",
        ));
}

#[test]
fn test_compare_agreeing_pair() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["compare", "Gate", "Ground"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not diverged"));
}

#[test]
fn test_compare_json() {
    let dir = tempdir().unwrap();
    let output = campus_in(dir.path())
        .args(["--format", "json", "compare", "Gate", "Library"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["diverged"], true);
    assert_eq!(json["bfs"]["cost"], 24);
    assert_eq!(json["dijkstra"]["cost"], 9);
    assert_eq!(json["dijkstra"]["algorithm"], "Dijkstra");
}

#[test]
fn test_compare_records() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["--format", "records", "compare", "Gate", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"H campus=1 records=1 mode=compare from="Gate" to="Library" diverged=true"#,
        ))
        .stdout(predicate::str::contains("A BFS found=true hops=2 cost=24"))
        .stdout(predicate::str::contains("A Dijkstra found=true hops=3 cost=9"));
}

#[test]
fn test_compare_unknown_location() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["compare", "Nowhere", "Gate"])
        .assert()
        .code(3);
}
