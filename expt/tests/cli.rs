//! CLI Interface E2E Tests
//!
//! These tests run the expt binary against fixture sources and check its
//! output, exit status, and configuration handling.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// An expt command isolated from any user configuration.
fn expt(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_expt"));
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("EXPT_CONFIG")
        .env_remove("EXPT_VERBOSE")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout should be JSON")
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    expt(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("lex")));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    expt(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("expt"));
}

#[test]
fn test_cli_lex_json() {
    let home = TempDir::new().unwrap();
    let output = expt(home.path())
        .arg("lex")
        .arg(fixtures_dir().join("hello.exp"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = stdout_json(&output);
    let tokens = json.as_array().unwrap();
    assert_eq!(tokens.len(), 31);
    assert_eq!(
        tokens[0],
        serde_json::json!({ "kind": "Symbol", "value": "import", "tag": "keyword" })
    );
    assert!(tokens.contains(&serde_json::json!({
        "kind": "Literal", "literalKind": "Int", "value": 16
    })));
    assert!(tokens.contains(&serde_json::json!({
        "kind": "Literal", "literalKind": "Char", "value": "!"
    })));
    assert!(tokens.contains(&serde_json::json!({ "kind": "Identifier", "value": "io.print" })));
}

#[test]
fn test_cli_lex_compact_is_one_line() {
    let home = TempDir::new().unwrap();
    expt(home.path())
        .args(["lex", "--compact"])
        .arg(fixtures_dir().join("hello.exp"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{").and(predicate::str::ends_with("}]\n")));
}

#[test]
fn test_cli_lex_summary() {
    let home = TempDir::new().unwrap();
    expt(home.path())
        .args(["lex", "--format", "summary"])
        .arg(fixtures_dir().join("hello.exp"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("31 tokens")
                .and(predicate::str::contains("Symbol      15"))
                .and(predicate::str::contains("Keyword     6"))
                .and(predicate::str::contains("Literal     3"))
                .and(predicate::str::contains("Identifier  7")),
        );
}

#[test]
fn test_cli_lex_output_file() {
    let home = TempDir::new().unwrap();
    let output_path = home.path().join("out").join("tokens.json");

    expt(home.path())
        .arg("lex")
        .arg(fixtures_dir().join("hello.exp"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read(&output_path).unwrap();
    assert_eq!(stdout_json(&written).as_array().unwrap().len(), 31);
}

#[test]
fn test_cli_lex_error_writes_prefix_and_fails() {
    let home = TempDir::new().unwrap();
    let assert = expt(home.path())
        .arg("lex")
        .arg(fixtures_dir().join("unterminated.exp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("StringLiteral"));

    let json = stdout_json(&assert.get_output().stdout);
    assert_eq!(json.as_array().unwrap().len(), 8);
}

#[test]
fn test_cli_lex_missing_file() {
    let home = TempDir::new().unwrap();
    expt(home.path())
        .args(["lex", "does-not-exist.exp"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_lex_directory() {
    let home = TempDir::new().unwrap();
    expt(home.path())
        .arg("lex")
        .arg(fixtures_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported"));
}

#[test]
fn test_cli_lex_unknown_format() {
    let home = TempDir::new().unwrap();
    expt(home.path())
        .args(["lex", "--format", "xml"])
        .arg(fixtures_dir().join("hello.exp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn test_cli_config_from_current_dir() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("expt.toml"),
        "[lex]\nformat = \"summary\"\n",
    )
    .unwrap();

    expt(home.path())
        .arg("lex")
        .arg(fixtures_dir().join("hello.exp"))
        .assert()
        .success()
        .stdout(predicate::str::contains("31 tokens"));
}

#[test]
fn test_cli_explicit_config_overridden_by_flag() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join("custom.toml");
    std::fs::write(&config_path, "[lex]\nformat = \"summary\"\n").unwrap();

    let output = expt(home.path())
        .arg("--config")
        .arg(&config_path)
        .args(["lex", "--format", "json"])
        .arg(fixtures_dir().join("hello.exp"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(stdout_json(&output).is_array());
}

#[test]
fn test_cli_missing_config_fails() {
    let home = TempDir::new().unwrap();
    expt(home.path())
        .args(["--config", "missing.toml", "lex"])
        .arg(fixtures_dir().join("hello.exp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_cli_init_then_lex() {
    let home = TempDir::new().unwrap();

    expt(home.path()).arg("init").assert().success();
    assert!(home.path().join("expt.toml").exists());

    expt(home.path()).arg("init").assert().failure();
    expt(home.path()).args(["init", "--force"]).assert().success();

    expt(home.path())
        .arg("lex")
        .arg(fixtures_dir().join("hello.exp"))
        .assert()
        .success();
}
