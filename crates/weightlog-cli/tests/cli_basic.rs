//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated HOME and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command with `home` as the home directory.
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_weightlog-cli"))
        .args(args)
        .env("HOME", home)
        .env_remove("WEIGHTLOG_ENV")
        .env_remove("WEIGHTLOG_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn write_input(dir: &Path, json: &str) -> String {
    let path = dir.join("weights.json");
    std::fs::write(&path, json).unwrap();
    path.to_string_lossy().to_string()
}

fn parse(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Failed to parse JSON output")
}

const SERIES: &str = r#"[
    {"value": 110.0, "date": "2024-01-03T07:00:00Z"},
    {"value": 100.0, "date": "2024-01-01T07:00:00Z", "fat_percent": 20.0}
]"#;

#[test]
fn test_derive_with_height_flag() {
    let home = tempfile::tempdir().unwrap();
    let input = write_input(home.path(), SERIES);

    let (code, stdout, stderr) =
        run_cli(home.path(), &["derive", "--input", &input, "--height", "2", "--unit", "m"]);
    assert_eq!(code, 0, "derive failed: {stderr}");

    let json = parse(&stdout);
    let second = &json[1];
    assert_eq!(second["lean_mass"], 80.0);
    assert_eq!(second["fat_mass"], 20.0);
    assert_eq!(second["bmi"], 25.0);
    assert!(json[0].get("lean_mass").is_none());
}

#[test]
fn test_derive_rejects_unknown_unit() {
    let home = tempfile::tempdir().unwrap();
    let input = write_input(home.path(), SERIES);

    let (code, _, stderr) =
        run_cli(home.path(), &["derive", "--input", &input, "--height", "2", "--unit", "cubits"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_interpolate_sorts_and_fills() {
    let home = tempfile::tempdir().unwrap();
    let input = write_input(home.path(), SERIES);

    let (code, stdout, stderr) = run_cli(home.path(), &["interpolate", "--input", &input]);
    assert_eq!(code, 0, "interpolate failed: {stderr}");
    let json = parse(&stdout);
    let filled = json.as_array().unwrap();
    assert_eq!(filled.len(), 1);
    assert_eq!(filled[0]["value"], 105.0);
    assert_eq!(filled[0]["date"], "2024-01-02T00:00:00Z");

    let (code, stdout, _) = run_cli(home.path(), &["interpolate", "--input", &input, "--fill"]);
    assert_eq!(code, 0);
    assert_eq!(parse(&stdout).as_array().unwrap().len(), 3);
}

#[test]
fn test_current_and_recent() {
    let home = tempfile::tempdir().unwrap();
    let input = write_input(home.path(), SERIES);

    let (code, stdout, _) = run_cli(home.path(), &["current", "--input", &input]);
    assert_eq!(code, 0);
    assert_eq!(parse(&stdout)["value"], 110.0);

    let (code, stdout, _) = run_cli(home.path(), &["recent", "--input", &input, "-n", "1"]);
    assert_eq!(code, 0);
    let recent = parse(&stdout);
    assert_eq!(recent.as_array().unwrap().len(), 1);
    assert_eq!(recent[0]["value"], 110.0);
}

#[test]
fn test_current_on_empty_input_fails() {
    let home = tempfile::tempdir().unwrap();
    let input = write_input(home.path(), "[]");
    let (code, _, _) = run_cli(home.path(), &["current", "--input", &input]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_height_feeds_derive() {
    let home = tempfile::tempdir().unwrap();
    let input = write_input(home.path(), SERIES);

    let (code, stdout, _) = run_cli(home.path(), &["config", "set", "profile.height", "200"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (code, stdout, _) = run_cli(home.path(), &["config", "get", "profile.height"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "200.0");

    let (code, stdout, stderr) = run_cli(home.path(), &["derive", "--input", &input]);
    assert_eq!(code, 0, "derive failed: {stderr}");
    assert_eq!(parse(&stdout)[0]["bmi"], 27.5);
}

#[test]
fn test_broken_config_is_reported() {
    let home = tempfile::tempdir().unwrap();
    let input = write_input(home.path(), SERIES);
    let config_dir = home.path().join(".config").join("weightlog");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[profile]\nheight = \"oops").unwrap();

    let (code, stdout, stderr) = run_cli(home.path(), &["derive", "--input", &input]);
    assert_eq!(code, 0, "derive failed: {stderr}");
    assert!(!stderr.is_empty(), "broken config went unreported");
    assert!(stderr.contains("using defaults"), "unexpected stderr: {stderr}");
    assert!(parse(&stdout)[0].get("bmi").is_none());
}

#[test]
fn test_derive_unit_requires_height() {
    let home = tempfile::tempdir().unwrap();
    let input = write_input(home.path(), SERIES);

    let (code, stdout, stderr) = run_cli(home.path(), &["derive", "--input", &input, "--unit", "m"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("--height"), "unexpected stderr: {stderr}");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["config", "get", "profile.nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_refresh_bmi_overwrites() {
    let home = tempfile::tempdir().unwrap();
    let input = write_input(
        home.path(),
        r#"[{"value": 80.0, "date": "2024-01-01T07:00:00Z", "bmi": 99.0}]"#,
    );
    let (code, stdout, _) = run_cli(
        home.path(),
        &["refresh-bmi", "--input", &input, "--height", "200"],
    );
    assert_eq!(code, 0);
    assert_eq!(parse(&stdout)[0]["bmi"], 20.0);
}
