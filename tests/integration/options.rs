//! Output flags, stdin input, and configuration files

use predicates::prelude::*;
use terraconf::test_utils::{ResourceFixture, StateFixture};

use crate::common::TestProject;

fn simple_state() -> StateFixture {
    StateFixture::new().resource(
        "test_type.test_id",
        ResourceFixture::new("test_type").attribute("one", "1").attribute("three", "3"),
    )
}

#[test]
fn test_raw_skips_formatting() {
    let project = TestProject::new().unwrap();
    project.write_state(&simple_state()).unwrap();

    project
        .command()
        .args(["--raw", "terraform.tfstate"])
        .assert()
        .success()
        .stdout("resource \"test_type\" \"test_id\" {\none = \"1\"\nthree = \"3\"\n}\n\n");
}

#[test]
fn test_output_writes_file() {
    let project = TestProject::new().unwrap();
    project.write_state(&simple_state()).unwrap();

    project
        .command()
        .args(["terraform.tfstate", "--output", "main.tf"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        project.read_file("main.tf").unwrap(),
        "resource \"test_type\" \"test_id\" {\n  one   = \"1\"\n  three = \"3\"\n}\n"
    );
}

#[test]
fn test_reads_state_from_stdin() {
    let project = TestProject::new().unwrap();
    let json = simple_state().to_json().unwrap();

    project
        .command()
        .arg("-")
        .write_stdin(json)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("resource \"test_type\" \"test_id\" {"));
}

#[test]
fn test_local_config_file_sets_indent() {
    let project = TestProject::new().unwrap();
    project.write_state(&simple_state()).unwrap();
    project.write_file("terraconf.toml", "[format]\nindent = 4\nalign_equals = false\n").unwrap();

    project
        .command()
        .arg("terraform.tfstate")
        .assert()
        .success()
        .stdout("resource \"test_type\" \"test_id\" {\n    one = \"1\"\n    three = \"3\"\n}\n\n");
}

#[test]
fn test_home_config_file_is_used() {
    let project = TestProject::new().unwrap();
    project.write_state(&simple_state()).unwrap();
    let config_dir = project.home_path().join(".terraconf");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[format]\nindent = 3\n").unwrap();

    project
        .command()
        .arg("terraform.tfstate")
        .assert()
        .success()
        .stdout(predicate::str::contains("\n   one   = \"1\"\n"));
}

#[test]
fn test_explicit_config_overrides_local() {
    let project = TestProject::new().unwrap();
    project.write_state(&simple_state()).unwrap();
    project.write_file("terraconf.toml", "[format]\nindent = 4\n").unwrap();
    project.write_file("custom.toml", "[format]\nindent = 1\n").unwrap();

    project
        .command()
        .args(["terraform.tfstate", "--config", "custom.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n one   = \"1\"\n"));
}

#[test]
fn test_config_env_var() {
    let project = TestProject::new().unwrap();
    project.write_state(&simple_state()).unwrap();
    let config = project.write_file("env.toml", "[format]\nindent = 4\n").unwrap();

    project
        .command()
        .env("TERRACONF_CONFIG", &config)
        .arg("terraform.tfstate")
        .assert()
        .success()
        .stdout(predicate::str::contains("\n    one   = \"1\"\n"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let project = TestProject::new().unwrap();
    project.write_state(&simple_state()).unwrap();

    project
        .command()
        .args(["--verbose", "terraform.tfstate"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("resource "))
        .stderr(predicate::str::contains("Generated 1 resource block(s)"));
}
