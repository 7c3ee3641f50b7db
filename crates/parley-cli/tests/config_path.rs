use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("parley")
        .env("PARLEY_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(dir.path().to_string_lossy().as_ref()));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("parley")
        .env("PARLEY_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("mobile_breakpoint = 100"));
    assert!(contents.contains("[store]"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "# existing config").unwrap();

    cargo_bin_cmd!("parley")
        .env("PARLEY_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_generate_prints_defaults() {
    cargo_bin_cmd!("parley")
        .args(["config", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_conversation_title = \"New Chat\""))
        .stdout(predicate::str::contains("theme = \"dark\""));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "mobile_breakpoint = \"wide\"").unwrap();

    cargo_bin_cmd!("parley")
        .env("PARLEY_HOME", dir.path())
        .arg("chat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_zero_breakpoint_in_config_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "mobile_breakpoint = 0\n").unwrap();

    cargo_bin_cmd!("parley")
        .env("PARLEY_HOME", dir.path())
        .arg("chat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mobile_breakpoint must be at least 1"));
}
