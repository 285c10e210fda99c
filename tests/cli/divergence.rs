use crate::cli::support::{campus_in, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Divergence command tests
// ============================================================================

#[test]
fn test_divergence_summary() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .arg("divergence")
        .assert()
        .success()
        .stdout(predicate::str::contains("of 36 pairs diverged"))
        .stdout(predicate::str::contains("Gate -> Library").not());
}

#[test]
fn test_divergence_lists_pairs() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["divergence", "--pairs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Gate -> Library: BFS 2 hops / cost 24, Dijkstra 3 hops / cost 9",
        ));
}

#[test]
fn test_divergence_json() {
    let dir = tempdir().unwrap();
    let output = campus_in(dir.path())
        .args(["--format", "json", "divergence"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["total_pairs"], 36);
    assert_eq!(json["skipped_pairs"], 0);
    assert!(json.get("pairs").is_none());

    let output = campus_in(dir.path())
        .args(["--format", "json", "divergence", "--pairs"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let pairs = json["pairs"].as_array().unwrap();
    assert_eq!(pairs.len() as u64, json["diverged_pairs"].as_u64().unwrap());
    assert!(pairs
        .iter()
        .any(|p| p["from"] == "Gate" && p["to"] == "Library"));
}

#[test]
fn test_divergence_empty_map() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["--empty", "--format", "records", "divergence"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H campus=1 records=1 mode=divergence total=0 diverged=0 percent=0 skipped=0",
        ));
}
