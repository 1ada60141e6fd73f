//! End-to-end tests for `palettekit generate` and `palettekit edit`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Generate Command Tests
// ============================================================================

#[test]
fn test_generate_default_size() {
    let output = run(&["generate", "--json"]);
    assert_success(&output);

    let result = stdout_json(&output);
    let colors = json_strings(&result["colors"]);
    assert_eq!(colors.len(), 20, "Default config asks for 20 colors");
    assert!(colors.iter().all(|c| c.len() == 7 && c.starts_with('#')));
    assert!(result["locked"].as_array().unwrap().is_empty());
}

#[test]
fn test_generate_count_is_clamped() {
    let output = run(&["generate", "--count", "250", "--json"]);
    assert_success(&output);
    assert_eq!(json_strings(&stdout_json(&output)["colors"]).len(), 100);

    let output = run(&["generate", "--count", "0", "--json"]);
    assert_success(&output);
    assert_eq!(json_strings(&stdout_json(&output)["colors"]).len(), 1);
}

#[test]
fn test_generate_with_seed_is_deterministic() {
    let first = run(&["generate", "--count", "6", "--seed", "42", "--json"]);
    let second = run(&["generate", "--count", "6", "--seed", "42", "--json"]);
    assert_success(&first);
    assert_success(&second);
    assert_eq!(stdout_json(&first), stdout_json(&second));
}

#[test]
fn test_generate_from_token() {
    let token = token_for(&["#112233", "#AABBCC", "#ff8800"]);
    let output = run(&["generate", "--token", &token, "--json"]);
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(
        json_strings(&result["colors"]),
        vec!["#112233", "#AABBCC", "#FF8800"]
    );
    assert_eq!(result["token"].as_str(), Some(token.as_str()));
    assert!(result["url"]
        .as_str()
        .unwrap()
        .starts_with("http://localhost:5173/?colors="));
}

#[test]
fn test_generate_bad_token_falls_back_to_random() {
    let output = run(&["generate", "--token", "%%%garbage", "--count", "4", "--json"]);
    assert_success(&output);
    assert_eq!(json_strings(&stdout_json(&output)["colors"]).len(), 4);
}

#[test]
fn test_generate_human_output() {
    let output = run(&["generate", "--count", "2"]);
    assert_success(&output);

    let text = stdout(&output);
    assert!(text.contains("Token: "), "stdout: {text}");
    assert!(text.contains("Share: "), "stdout: {text}");
}

// ============================================================================
// Edit Command Tests
// ============================================================================

#[test]
fn test_edit_lock_then_regenerate_keeps_locked_color() {
    let token = token_for(&["#102030", "#405060", "#708090"]);
    let output = run(&[
        "edit",
        &token,
        "--lock",
        "1",
        "--regenerate",
        "--seed",
        "3",
        "--json",
    ]);
    assert_success(&output);

    let result = stdout_json(&output);
    let colors = json_strings(&result["colors"]);
    assert_eq!(colors.len(), 3);
    assert_eq!(colors[1], "#405060");
    assert_eq!(result["locked"], serde_json::json!([1]));
}

#[test]
fn test_edit_set_and_resize() {
    let token = token_for(&["#000000", "#111111"]);
    let output = run(&["edit", &token, "--set", "0=#FF0000", "--resize", "4", "--json"]);
    assert_success(&output);

    let colors = json_strings(&stdout_json(&output)["colors"]);
    assert_eq!(colors.len(), 4);
    assert_eq!(colors[0], "#FF0000");
    assert_eq!(colors[1], "#111111");
}

#[test]
fn test_edit_lighten_and_darken() {
    let token = token_for(&["#808080", "#808080"]);
    let output = run(&[
        "edit", &token, "--lighten", "0", "--darken", "1", "--amount", "20", "--json",
    ]);
    assert_success(&output);

    let colors = json_strings(&stdout_json(&output)["colors"]);
    assert!(colors[0] > colors[1], "{colors:?}");
}

#[test]
fn test_edit_invalid_color_fails_validation() {
    let token = token_for(&["#000000"]);
    let output = run(&["edit", &token, "--set", "0=#GGGGGG"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn test_edit_out_of_range_fails_validation() {
    let token = token_for(&["#000000"]);
    let output = run(&["edit", &token, "--lock", "5"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_edit_rejects_undecodable_token() {
    let output = run(&["edit", "not-a-token", "--regenerate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid share token"));
}
