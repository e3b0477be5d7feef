//! Configuration output for representative states

use predicates::prelude::*;
use terraconf::test_utils::{ResourceFixture, StateFixture};

use crate::common::TestProject;

#[test]
fn test_prints_simple_resource() {
    let project = TestProject::new().unwrap();
    let state = StateFixture::new()
        .resource("test_type.test_id", ResourceFixture::new("test_type").attribute("one", "1"));
    let path = project.write_state(&state).unwrap();

    project
        .command()
        .arg(&path)
        .assert()
        .success()
        .stdout("resource \"test_type\" \"test_id\" {\n  one = \"1\"\n}\n\n");
}

#[test]
fn test_prints_dependencies() {
    let project = TestProject::new().unwrap();
    let state = StateFixture::new().resource(
        "test_type.test_id",
        ResourceFixture::new("test_type")
            .attribute("one", "1")
            .depends_on(["test_dep_one", "test_dep_two"]),
    );
    project.write_state(&state).unwrap();

    project.command().arg("terraform.tfstate").assert().success().stdout(
        "resource \"test_type\" \"test_id\" {\n  one = \"1\"\n\n  depends_on = [\n    \"test_dep_one\",\n    \"test_dep_two\",\n  ]\n}\n\n",
    );
}

#[test]
fn test_prints_nested_attributes() {
    let project = TestProject::new().unwrap();
    let state = StateFixture::new().resource(
        "aws_instance.web",
        ResourceFixture::new("aws_instance")
            .id("i-0abc")
            .attribute("ami", "ami-1234")
            .attribute("ebs_optimized", "false")
            .attribute("tags.%", "2")
            .attribute("tags.Name", "web")
            .attribute("tags.Env", "prod")
            .attribute("security_groups.#", "2")
            .attribute("security_groups.0", "sg-b")
            .attribute("security_groups.1", "sg-a")
            .attribute("root_block_device.#", "1")
            .attribute("root_block_device.0.volume_size", "8")
            .attribute("root_block_device.0.volume_type", "gp2")
            .attribute("ephemeral_block_device.#", "0"),
    );
    project.write_state(&state).unwrap();

    let expected = "\
resource \"aws_instance\" \"web\" {
  ami           = \"ami-1234\"
  ebs_optimized = \"false\"

  root_block_device {
    volume_size = \"8\"
    volume_type = \"gp2\"
  }

  security_groups = [
    \"sg-b\",
    \"sg-a\",
  ]

  tags {
    Env  = \"prod\"
    Name = \"web\"
  }
}

";
    project.command().arg("terraform.tfstate").assert().success().stdout(expected);
}

#[test]
fn test_skips_data_sources_and_invalid_ids() {
    let project = TestProject::new().unwrap();
    let state = StateFixture::new()
        .resource("data.aws_ami.ubuntu", ResourceFixture::new("aws_ami").attribute("id", "ami-1"))
        .resource("not_a_resource_id", ResourceFixture::empty());
    project.write_state(&state).unwrap();

    project.command().arg("terraform.tfstate").assert().success().stdout("\n\n");
}

#[test]
fn test_includes_resources_from_every_module() {
    let project = TestProject::new().unwrap();
    let state = StateFixture::new()
        .resource("a.root", ResourceFixture::new("a").attribute("x", "1"))
        .module(["root", "network"])
        .resource("b.child", ResourceFixture::new("b").attribute("y", "2"));
    project.write_state(&state).unwrap();

    project.command().arg("terraform.tfstate").assert().success().stdout(
        "resource \"a\" \"root\" {\n  x = \"1\"\n}\n\nresource \"b\" \"child\" {\n  y = \"2\"\n}\n\n",
    );
}

#[test]
fn test_resource_without_primary_is_skipped_with_warning() {
    let project = TestProject::new().unwrap();
    let state = StateFixture::new()
        .resource("a.gone", ResourceFixture::new("a").without_primary())
        .resource("a.kept", ResourceFixture::new("a").attribute("x", "1"));
    project.write_state(&state).unwrap();

    project
        .command()
        .arg("terraform.tfstate")
        .assert()
        .success()
        .stdout("resource \"a\" \"kept\" {\n  x = \"1\"\n}\n\n")
        .stderr(predicate::str::contains("a.gone"));
}

#[test]
fn test_output_is_deterministic() {
    let project = TestProject::new().unwrap();
    let state = StateFixture::new().resource(
        "aws_security_group.web",
        ResourceFixture::new("aws_security_group")
            .attribute("name", "web")
            .attribute("ingress.#", "2")
            .attribute("ingress.2541437006.from_port", "443")
            .attribute("ingress.2541437006.to_port", "443")
            .attribute("ingress.753360330.from_port", "80")
            .attribute("ingress.753360330.to_port", "80")
            .attribute("tags.%", "2")
            .attribute("tags.b", "2")
            .attribute("tags.a", "1"),
    );
    project.write_state(&state).unwrap();

    let first = project.command().arg("terraform.tfstate").output().unwrap();
    assert!(first.status.success());
    for _ in 0..5 {
        let next = project.command().arg("terraform.tfstate").output().unwrap();
        assert_eq!(next.stdout, first.stdout);
    }

    let stdout = String::from_utf8(first.stdout).unwrap();
    assert!(stdout.contains("ingress {"));
    assert_eq!(stdout.matches("ingress {").count(), 2);
}
