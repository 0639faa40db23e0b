use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn bazaar(args: &[&str]) -> Output {
    bazaar_with_env(args, &[])
}

fn bazaar_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bazaar"))
        .args(args)
        .env("BAZAAR__LOGGING__LEVEL", "warn")
        .envs(env.iter().copied())
        .output()
        .expect("binary should run")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn write(dir: &TempDir, name: &str, value: &Value) -> String {
    let path = dir.path().join(name);
    fs::write(&path, value.to_string()).unwrap();
    path_arg(&path)
}

fn path_arg(path: &Path) -> String {
    path.to_str().unwrap().to_owned()
}

#[test]
fn default_prints_the_template() {
    let output = bazaar(&["default"]);
    assert!(output.status.success());

    let tree = stdout_json(&output);
    assert_eq!(tree["handlingTime"], json!({ "from": 0, "to": 1 }));
    assert_eq!(tree["methods"]["sameDay"]["cutOffTime"], "12:00");
    assert_eq!(tree["freeShipping"]["available"], false);
}

#[test]
fn check_reports_bare_same_day_as_draft() {
    let dir = TempDir::new().unwrap();
    let rows = write(
        &dir,
        "rows.json",
        &json!({ "methods": [{ "method_type": "same_day", "available": true }] }),
    );

    let output = bazaar(&["check", "--rows", &rows, "--brand", "acme"]);
    assert!(!output.status.success());

    let report = stdout_json(&output);
    assert_eq!(report["brand"], "acme");
    assert_eq!(report["status"], "draft");
    assert_eq!(report["violations"].as_array().map(Vec::len), Some(4));
}

#[test]
fn validate_reports_the_template_as_valid() {
    let dir = TempDir::new().unwrap();
    let tree = write(&dir, "tree.json", &stdout_json(&bazaar(&["default"])));

    let output = bazaar(&["validate", "--tree", &tree]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({ "status": "valid", "violations": [] }));
}

#[test]
fn flatten_then_transform_round_trips_through_files() {
    let dir = TempDir::new().unwrap();
    let default = stdout_json(&bazaar(&["default"]));
    let tree = write(&dir, "tree.json", &default);

    let rows = stdout_json(&bazaar(&["flatten", "--tree", &tree]));
    let rows = write(&dir, "rows.json", &rows);

    let output = bazaar(&["transform", "--rows", &rows]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), default);
}

#[test]
fn publish_reports_the_effective_time() {
    let dir = TempDir::new().unwrap();
    let tree = write(&dir, "tree.json", &stdout_json(&bazaar(&["default"])));

    let output = bazaar(&["publish", "--tree", &tree, "--brand", "acme"]);
    assert!(output.status.success());

    let publication = stdout_json(&output);
    assert_eq!(publication["brand"], "acme");
    assert!(publication["effectiveAt"].is_string());
}

#[test]
fn publish_with_an_overflowing_delay_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let tree = write(&dir, "tree.json", &stdout_json(&bazaar(&["default"])));

    let output = bazaar_with_env(
        &["publish", "--tree", &tree],
        &[("BAZAAR__SHIPPING__PUBLISH_DELAY_HOURS", "4294967295")],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("overflows the calendar"));
}

#[test]
fn validate_fails_on_missing_file() {
    let output = bazaar(&["validate", "--tree", "/definitely/not/here.json"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
