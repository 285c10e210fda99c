use crate::cli::support::{campus_in, dir_with_config, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Locations command tests
// ============================================================================

#[test]
fn test_locations_lists_seeded_map() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("0  Gate -> Admin (12), Ground (3)"))
        .stdout(predicate::str::contains("8  Hostel"));
}

#[test]
fn test_locations_json() {
    let dir = tempdir().unwrap();
    let output = campus_in(dir.path())
        .args(["--format", "json", "locations"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["count"], 9);
    assert_eq!(json["edge_count"], 11);
    assert_eq!(json["locations"][2]["name"], "Library");
    assert_eq!(json["locations"][2]["index"], 2);
    assert_eq!(json["locations"][0]["neighbors"][0]["to"], "Admin");
    assert_eq!(json["locations"][0]["neighbors"][0]["weight"], 12);
}

#[test]
fn test_locations_records_list_each_edge_once() {
    let dir = tempdir().unwrap();
    let output = campus_in(dir.path())
        .args(["--format", "records", "locations"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("H campus=1 records=1 mode=locations locations=9 edges=11"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("N ")).count(), 9);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("E ")).count(), 11);
    assert!(stdout.contains(r#"N 0 "Gate""#));
    assert!(stdout.contains(r#"E "Gate" "Admin" 12"#));
}

#[test]
fn test_locations_empty_map() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["--empty", "locations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No locations"));
}

#[test]
fn test_locations_records_quote_names_with_spaces() {
    let dir = dir_with_config(
        r#"
[graph]
locations = ["Hostel B"]

[[graph.edges]]
from = "Lab"
to = "Hostel B"
weight = 3
"#,
    );
    campus_in(dir.path())
        .args(["--format", "records", "locations"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"N 9 "Hostel B""#))
        .stdout(predicate::str::contains(r#"E "Lab" "Hostel B" 3"#));
}
