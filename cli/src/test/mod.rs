#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::{
    predicate::str::{contains, is_empty},
    PredicateBooleanExt,
};

use test_context::TestContext;

mod commands;
mod gateway;
pub mod test_context;

#[test]
fn test_profile_arg() {
    // --profile wins over BROKER_PROFILE
    let context = TestContext::new();

    let assert = context
        .command()
        .env("BROKER_PROFILE", "wrong_profile")
        .args(["--profile", "test_profile_arg"])
        .arg("config")
        .assert();

    assert
        .success()
        .stdout(contains(r#""profile_name": "test_profile_arg""#).and(contains(r#""api_url""#)))
        .stderr(is_empty());
}

#[test]
fn test_profile_env() {
    let context = TestContext::new();

    let assert = context
        .command()
        .env("BROKER_PROFILE", "test_profile_env")
        .arg("config")
        .assert();

    assert
        .success()
        .stdout(contains(r#""profile_name": "test_profile_env""#).and(contains(r#""page_size": 10"#)))
        .stderr(is_empty());
}

#[test]
fn test_no_command_prints_help() {
    let mut cmd = Command::cargo_bin("broker").unwrap();

    cmd.assert().success().stdout(contains("Usage"));
}
