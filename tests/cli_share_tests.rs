//! End-to-end tests for `encode`, `decode`, `harmony` and `color`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Encode / Decode
// ============================================================================

#[test]
fn test_encode_decode_round_trip() {
    let output = run(&["encode", "#ff0000", "#0F0", "hsl(240, 100%, 50%)"]);
    assert_success(&output);
    let token = stdout(&output).trim().to_string();
    assert_eq!(token, token_for(&["#FF0000", "#00FF00", "#0000FF"]));

    let output = run(&["decode", &token]);
    assert_success(&output);
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["#FF0000", "#00FF00", "#0000FF"]);
}

#[test]
fn test_decode_json() {
    let token = token_for(&["#abcdef"]);
    let output = run(&["decode", &token, "--json"]);
    assert_success(&output);
    assert_eq!(
        json_strings(&stdout_json(&output)["colors"]),
        vec!["#ABCDEF"]
    );
}

#[test]
fn test_decode_garbage_fails_validation() {
    for token in ["%%%", "bm90IGpzb24", ""] {
        let output = run(&["decode", token]);
        assert_eq!(output.status.code(), Some(1), "token {token:?}");
        assert!(stdout(&output).is_empty());
    }
}

#[test]
fn test_encode_invalid_color_fails_validation() {
    let output = run(&["encode", "#FF0000", "chartreuse"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("chartreuse"));
}

// ============================================================================
// Harmony
// ============================================================================

#[test]
fn test_harmony_hex_json() {
    let output = run(&["harmony", "triadic", "--hue", "200", "--hex", "--json"]);
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(result["kind"].as_str(), Some("triadic"));
    let colors = json_strings(&result["colors"]);
    assert_eq!(colors.len(), 20);
    assert!(colors.iter().all(|c| c.starts_with('#')));
    assert!(result.get("token").is_none());
}

#[test]
fn test_harmony_negative_hue_and_hsl_output() {
    let output = run(&["harmony", "analogous", "--hue", "-30"]);
    assert_success(&output);

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 20, "stdout: {text}");
    assert!(text.lines().all(|line| line.starts_with("hsl(")));
}

#[test]
fn test_harmony_unknown_kind_falls_back() {
    let output = run(&["harmony", "psychedelic", "--json"]);
    assert_success(&output);
    assert_eq!(
        stdout_json(&output)["kind"].as_str(),
        Some("monochromatic")
    );
    assert!(stderr(&output).contains("psychedelic"));
}

#[test]
fn test_harmony_token_matches_hex_colors() {
    let output = run(&["harmony", "qualitative", "--hex", "--token", "--json"]);
    assert_success(&output);

    let result = stdout_json(&output);
    let colors = json_strings(&result["colors"]);
    let refs: Vec<&str> = colors.iter().map(String::as_str).collect();
    assert_eq!(result["token"].as_str(), Some(token_for(&refs).as_str()));
    assert!(result["url"].as_str().unwrap().contains("colors="));
}

// ============================================================================
// Color
// ============================================================================

#[test]
fn test_color_json() {
    let output = run(&["color", "#FF0000", "--json"]);
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(result["hex"].as_str(), Some("#FF0000"));
    assert_eq!(result["hsl"].as_str(), Some("hsl(0, 100%, 50%)"));
    assert_eq!(result["rgb"], serde_json::json!([255, 0, 0]));
    assert_eq!(result["light"], serde_json::json!(false));
}

#[test]
fn test_color_shade_bounds() {
    let output = run(&["color", "#FAFAFA", "--lighten", "50", "--json"]);
    assert_success(&output);
    assert_eq!(stdout_json(&output)["hex"].as_str(), Some("#FFFFFF"));

    let output = run(&["color", "#808080", "--darken", "150"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_color_invalid_input() {
    let output = run(&["color", "rgb(1,2,3)"]);
    assert_eq!(output.status.code(), Some(1));
}
