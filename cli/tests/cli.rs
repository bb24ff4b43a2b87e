//! Smoke tests against the built binary. Having an integration test also
//! makes `cargo test` build `broker` for the end-to-end tests in `src/test`.

use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn test_version() {
    Command::cargo_bin("broker")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("broker"));
}

#[test]
fn test_unknown_subcommand_fails() {
    Command::cargo_bin("broker")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}
