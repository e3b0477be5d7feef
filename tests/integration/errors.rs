//! Exit codes and messages for bad input

use predicates::prelude::*;
use terraconf::test_utils::{ResourceFixture, StateFixture};

use crate::common::TestProject;

#[test]
fn test_missing_state_file() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .arg("missing.tfstate")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing.tfstate"));
}

#[test]
fn test_no_arguments() {
    let project = TestProject::new().unwrap();

    project.command().assert().failure().stderr(predicate::str::contains("STATE_FILE"));
}

#[test]
fn test_malformed_state() {
    let project = TestProject::new().unwrap();
    project.write_file("terraform.tfstate", "{ not json").unwrap();

    project
        .command()
        .arg("terraform.tfstate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("terraform.tfstate"));
}

#[test]
fn test_version_4_state_rejected() {
    let project = TestProject::new().unwrap();
    let state = StateFixture::new().version(4).resource("a.b", ResourceFixture::new("a"));
    project.write_state(&state).unwrap();

    project
        .command()
        .arg("terraform.tfstate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("version 4"));
}

#[test]
fn test_invalid_config_value() {
    let project = TestProject::new().unwrap();
    project.write_state(&StateFixture::new()).unwrap();
    project.write_file("terraconf.toml", "[format]\nindent = 0\n").unwrap();

    project
        .command()
        .arg("terraform.tfstate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("indent"));
}

#[test]
fn test_missing_explicit_config() {
    let project = TestProject::new().unwrap();
    project.write_state(&StateFixture::new()).unwrap();

    project
        .command()
        .args(["terraform.tfstate", "--config", "nope.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn test_unformattable_state_fails_without_output() {
    let project = TestProject::new().unwrap();
    let state = StateFixture::new().resource(
        "a.b",
        ResourceFixture::new("a")
            .attribute("x.#", "2")
            .attribute("x.0", "s")
            .attribute("x.1.#", "1")
            .attribute("x.1.0", "t"),
    );
    project.write_state(&state).unwrap();

    project
        .command()
        .arg("terraform.tfstate")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error formatting config string for state: At 4:2"))
        .stderr(predicate::str::contains("--raw"));

    project
        .command()
        .args(["--raw", "terraform.tfstate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"s\",\n = [\n"));
}
