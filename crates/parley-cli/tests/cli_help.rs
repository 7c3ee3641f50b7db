use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("parley")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--breakpoint"))
        .stdout(predicate::str::contains("--store-latency-ms"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("parley")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("parley "));
}

#[test]
fn test_rejects_non_numeric_breakpoint() {
    cargo_bin_cmd!("parley")
        .args(["--breakpoint", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_chat_requires_a_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("parley")
        .env("PARLEY_HOME", dir.path())
        .arg("chat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
