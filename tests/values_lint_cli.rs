use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CLEAN_VALUES: &str = r#"replicaCount: 3
environment: prod
service:
  type: ClusterIP
resources:
  requests:
    memory: 256Mi
  limits:
    memory: 1Gi
ingress:
  letsencrypt: true
  letsencryptSecret: letsencrypt-dns
"#;

const NODE_PORT_VALUES: &str = r#"service:
  type: NodePort
resources:
  requests:
    memory: 256Mi
  limits:
    memory: 1Gi
"#;

fn write_values(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

fn values_lint(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("values-lint").unwrap();
    // Keep a developer's ~/.values-lint.toml out of the picture
    cmd.current_dir(workdir).env("HOME", workdir);
    cmd
}

#[test]
fn default_directory_is_helm_values() {
    let temp_dir = TempDir::new().unwrap();
    write_values(&temp_dir.path().join("helm/values"), "api.yml", CLEAN_VALUES);

    values_lint(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Check values of file: helm/values/api.yml"))
        .stdout(predicate::str::contains("ServiceType - OK"))
        .stdout(predicate::str::contains("Resources - OK"))
        .stdout(predicate::str::contains("Ingress - OK"))
        .stdout(predicate::str::contains("ReplicaCount - OK"));
}

#[test]
fn first_fatal_stops_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let values = temp_dir.path().join("values");
    write_values(&values, "a-nodeport.yml", NODE_PORT_VALUES);
    write_values(&values, "b-clean.yml", CLEAN_VALUES);

    values_lint(temp_dir.path())
        .args(["check", "values"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("a-nodeport.yml"))
        .stdout(predicate::str::contains("b-clean.yml").not())
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("[VL001]"))
        .stderr(predicate::str::contains("ClusterIP"));
}

#[test]
fn warnings_keep_exit_status_zero() {
    let temp_dir = TempDir::new().unwrap();
    let values = temp_dir.path().join("values");
    write_values(
        &values,
        "prod.yml",
        "replicaCount: 1\nenvironment: prod\nresources:\n  requests:\n    memory: 512Mi\n  limits:\n    memory: 512Mi\n",
    );

    values_lint(temp_dir.path())
        .args(["check", "values"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING: memory requests and limits are identical"))
        .stdout(predicate::str::contains("WARNING: replicaCount = 1 in prod"))
        .stdout(predicate::str::contains("Ingress").not());
}

#[test]
fn unquoted_scalars_in_string_fields_are_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let values = temp_dir.path().join("values");
    write_values(
        &values,
        "app.yml",
        "environment: 2024\nservice:\n  type: ClusterIP\nresources:\n  requests:\n    memory: 256Mi\n  limits:\n    memory: 1Gi\ningress:\n  letsencrypt: true\n  letsencryptSecret: letsencrypt-dns\n",
    );

    values_lint(temp_dir.path())
        .args(["check", "values"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ingress - OK"));
}

#[test]
fn yaml_extension_is_not_checked() {
    let temp_dir = TempDir::new().unwrap();
    let values = temp_dir.path().join("values");
    write_values(&values, "ignored.yaml", NODE_PORT_VALUES);

    values_lint(temp_dir.path())
        .args(["check", "values"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    values_lint(temp_dir.path())
        .args(["check", "does/not/exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot list directory"));
}

#[test]
fn malformed_yaml_fails() {
    let temp_dir = TempDir::new().unwrap();
    let values = temp_dir.path().join("values");
    write_values(&values, "broken.yml", "service: [unclosed\n");

    values_lint(temp_dir.path())
        .args(["check", "values"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn unsupported_memory_unit_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let values = temp_dir.path().join("values");
    write_values(
        &values,
        "ki.yml",
        "resources:\n  requests:\n    memory: 10Ki\n  limits:\n    memory: 1Gi\n",
    );

    values_lint(temp_dir.path())
        .args(["check", "values"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported memory format"));
}

#[test]
fn config_file_sets_values_dir() {
    let temp_dir = TempDir::new().unwrap();
    write_values(&temp_dir.path().join("deploy"), "api.yml", CLEAN_VALUES);
    fs::write(
        temp_dir.path().join(".values-lint.toml"),
        "values_dir = \"deploy\"\n",
    )
    .unwrap();

    values_lint(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy/api.yml"));
}

#[test]
fn rules_lists_builtin_rules() {
    let temp_dir = TempDir::new().unwrap();

    values_lint(temp_dir.path())
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("VL001"))
        .stdout(predicate::str::contains("VL004"));

    values_lint(temp_dir.path())
        .args(["rules", "VL999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown rule code: VL999"));
}
