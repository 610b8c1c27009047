use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stub_program(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("ldc");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
    }

    path.to_string_lossy().to_string()
}

#[test]
fn test_static_completion_plain_output() {
    Command::cargo_bin("ldc-complete")
        .unwrap()
        .arg("ldc proj")
        .assert()
        .success()
        .stdout(predicate::str::contains("projects\tlist and operate on projects"));
}

#[test]
fn test_json_output_shape() {
    Command::cargo_bin("ldc-complete")
        .unwrap()
        .args(["--json", "ldc "])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"suggestions\":["))
        .stdout(predicate::str::contains("\"insertValue\":\"configs\""))
        .stdout(predicate::str::contains("\"isDangerous\":false"));
}

#[test]
fn test_dynamic_completion_through_stub() {
    let dir = TempDir::new().unwrap();
    let program = stub_program(&dir, r#"echo "| default | My Default |""#);

    Command::cargo_bin("ldc-complete")
        .unwrap()
        .args(["--program", &program, "ldc projects show "])
        .assert()
        .success()
        .stdout(predicate::str::contains("default\tMy Default"));
}

#[test]
fn test_missing_program_completes_empty() {
    Command::cargo_bin("ldc-complete")
        .unwrap()
        .args(["--program", "/definitely/not/a/real/binary", "ldc projects show "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_global_option_suggestions() {
    Command::cargo_bin("ldc-complete")
        .unwrap()
        .arg("ldc --conf")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config\tConfiguration to use"))
        .stdout(predicate::str::contains("--config-file\tConfiguration file to use"));
}
