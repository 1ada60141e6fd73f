//! End-to-end tests for `palettekit config` commands.

use std::sync::Mutex;

mod fixtures;
use fixtures::*;
use tempfile::TempDir;

// Mutex to ensure config tests that write files don't run in parallel
static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

fn show_json(config_dir: &std::path::Path) -> serde_json::Value {
    let output = isolated_command(&["config", "show", "--json"], config_dir)
        .output()
        .expect("Failed to execute command");
    assert_success(&output);
    stdout_json(&output)
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let output = run(&["config", "show"]);
    assert_success(&output);

    let text = stdout(&output);
    assert!(text.contains("PaletteKit Configuration"), "stdout: {text}");
    assert!(text.contains("Palette:"), "stdout: {text}");
}

#[test]
fn test_config_show_json_schema() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = show_json(temp_dir.path());

    assert!(result["palette"].is_object(), "Should have palette object");
    assert_eq!(result["palette"]["default_size"], serde_json::json!(20));
    assert!(result["palette"]["shade_step"].is_number());
    assert_eq!(
        result["share"]["base_url"].as_str(),
        Some("http://localhost:5173/")
    );
    assert!(result["ui"]["show_help_on_startup"].is_boolean());
    assert!(result["ui"]["show_hex_labels"].is_boolean());
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists() {
    let _lock = CONFIG_TEST_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path();

    let output = isolated_command(
        &[
            "config",
            "set",
            "--default-size",
            "8",
            "--base-url",
            "https://palettes.example/app",
            "--hex-labels",
            "false",
        ],
        config_dir,
    )
    .output()
    .expect("Failed to execute command");
    assert_success(&output);
    assert!(config_dir.join("config.toml").exists(), "config.toml should be written");

    let result = show_json(config_dir);
    assert_eq!(result["palette"]["default_size"], serde_json::json!(8));
    assert_eq!(
        result["share"]["base_url"].as_str(),
        Some("https://palettes.example/app")
    );
    assert_eq!(result["ui"]["show_hex_labels"], serde_json::json!(false));
    assert_eq!(result["ui"]["show_help_on_startup"], serde_json::json!(true));
}

#[test]
fn test_config_default_size_drives_generate() {
    let _lock = CONFIG_TEST_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path();

    let output = isolated_command(&["config", "set", "--default-size", "3"], config_dir)
        .output()
        .expect("Failed to execute command");
    assert_success(&output);

    let output = isolated_command(&["generate", "--json"], config_dir)
        .output()
        .expect("Failed to execute command");
    assert_success(&output);
    assert_eq!(json_strings(&stdout_json(&output)["colors"]).len(), 3);
}

#[test]
fn test_config_set_without_options() {
    let output = run(&["config", "set"]);
    assert_eq!(
        output.status.code(),
        Some(1),
        "Set without options should fail with exit code 1"
    );
    assert!(stderr(&output).contains("--default-size"));
}

#[test]
fn test_config_set_invalid_values() {
    let _lock = CONFIG_TEST_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path();

    for args in [
        ["config", "set", "--default-size", "0"],
        ["config", "set", "--default-size", "101"],
        ["config", "set", "--shade-step", "0"],
        ["config", "set", "--base-url", "ftp://nope"],
    ] {
        let output = isolated_command(&args, config_dir)
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(1), "{args:?}");
    }
    assert!(!config_dir.join("config.toml").exists());
}

#[test]
fn test_malformed_config_is_an_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("config.toml"), "palette = [not toml")
        .expect("Failed to write config");

    let output = isolated_command(&["generate"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load configuration"));
}

#[test]
fn test_config_set_keeps_malformed_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    let broken = "[share]\nbase_url = \"https://mine.example/\"\n[palette\n";
    std::fs::write(&config_path, broken).expect("Failed to write config");

    let output = isolated_command(&["config", "set", "--shade-step", "5"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2), "stdout: {}", stdout(&output));
    assert!(stderr(&output).contains("Failed to load configuration"));

    let after = std::fs::read_to_string(&config_path).expect("Failed to read config");
    assert_eq!(after, broken, "Malformed config must be left untouched");
}
