//! Shared test fixtures for palette and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::path::Path;
use std::process::{Command, Output};

use palettekit::{PaletteCodec, PaletteStore};
use tempfile::TempDir;

/// Path to the palettekit binary
pub fn palettekit_bin() -> &'static str {
    env!("CARGO_BIN_EXE_palettekit")
}

/// Creates a Command with an isolated config directory.
/// Pass in the same directory to share configuration between commands in one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(palettekit_bin());
    cmd.env("PALETTEKIT_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary against a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, temp_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout(output)).expect("Should parse JSON output")
}

/// Asserts a zero exit code, showing stderr on failure.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        stderr(output)
    );
}

/// Share token for the given colors.
pub fn token_for(colors: &[&str]) -> String {
    PaletteCodec::encode(colors)
}

/// Store with a fixed seed and `size` cells.
pub fn seeded_store(seed: u64, size: usize) -> PaletteStore {
    let mut store = PaletteStore::seeded(seed);
    store.initialize(size, None);
    store
}

/// JSON array of strings as a Vec.
pub fn json_strings(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("Should be an array")
        .iter()
        .map(|v| v.as_str().expect("Should be a string").to_string())
        .collect()
}
