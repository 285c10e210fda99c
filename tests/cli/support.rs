use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for campus
pub fn campus() -> Command {
    cargo_bin_cmd!("campus")
}

/// Command running in `dir`, isolated from any ambient config
pub fn campus_in(dir: &Path) -> Command {
    let mut cmd = campus();
    cmd.current_dir(dir).env_remove("CAMPUS_CONFIG");
    cmd
}

/// Temp dir holding `campus.toml` with the given contents
pub fn dir_with_config(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("campus.toml"), contents).unwrap();
    dir
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}
