use crate::cli::support::{campus_in, dir_with_config, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Config file tests
// ============================================================================

#[test]
fn test_config_extends_seeded_map() {
    let dir = dir_with_config(
        r#"
[graph]
locations = ["Annex"]

[[graph.edges]]
from = "Hostel"
to = "Annex"
weight = 2
"#,
    );

    campus_in(dir.path())
        .args(["route", "Gate", "Annex"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dijkstra: Gate -> Ground -> Hostel -> Annex",
        ))
        .stdout(predicate::str::contains("Cost: 9"));
}

#[test]
fn test_config_sets_default_format() {
    let dir = dir_with_config("[output]\nformat = \"json\"\n");

    let output = campus_in(dir.path()).arg("locations").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["count"], 9);

    // --format wins over the config
    campus_in(dir.path())
        .args(["--format", "human", "locations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gate -> Admin (12)"));
}

#[test]
fn test_explicit_config_path() {
    let config_dir = dir_with_config("[graph]\nseed = \"empty\"\nlocations = [\"Solo\"]\n");
    let work = tempdir().unwrap();
    let path = config_dir.path().join("campus.toml");

    campus_in(work.path())
        .arg("--config")
        .arg(&path)
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("0  Solo"))
        .stdout(predicate::str::contains("Gate").not());
}

#[test]
fn test_empty_flag_overrides_config_seed() {
    let dir = dir_with_config("[graph]\nlocations = [\"Annex\"]\n");
    campus_in(dir.path())
        .args(["--empty", "--format", "json", "locations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"));
}

#[test]
fn test_config_with_bad_edge_exit_code_3() {
    let dir = dir_with_config(
        r#"
[[graph.edges]]
from = "Gate"
to = "Nowhere"
weight = 4
"#,
    );
    campus_in(dir.path())
        .arg("locations")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("location not found: Nowhere"));
}

#[test]
fn test_config_with_zero_weight_exit_code_3() {
    let dir = dir_with_config(
        r#"
[[graph.edges]]
from = "Gate"
to = "Lab"
weight = 0
"#,
    );
    campus_in(dir.path())
        .arg("locations")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge weight must be between 1 and"));
}

#[test]
fn test_missing_config_file_exit_code_1() {
    let dir = tempdir().unwrap();
    campus_in(dir.path())
        .args(["--config", "does-not-exist.toml", "locations"])
        .assert()
        .code(1);
}

#[test]
fn test_malformed_config_exit_code_1() {
    let dir = dir_with_config("[graph\n");
    campus_in(dir.path())
        .arg("locations")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_config_with_oversized_weight_exit_code_3() {
    let dir = dir_with_config(
        r#"
[[graph.edges]]
from = "Gate"
to = "Lab"
weight = 9223372036854775802
"#,
    );
    campus_in(dir.path())
        .arg("locations")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("got 9223372036854775802"));
}
