//! CLI integration tests. Each test scouts its own temp project directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cos_cmd() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("cos").unwrap()
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn installed_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".ai-context-os/PROJECT_OS.md", "# Kernel");
    write(dir.path(), ".ai-context-os/skills/py.md", "# Python");
    write(dir.path(), ".ai-context-os/skills/js.md", "# JavaScript");
    write(dir.path(), ".cursorrules", "Read .ai-context-os/PROJECT_OS.md");
    write(dir.path(), "CLAUDE.md", "Read .ai-context-os/PROJECT_OS.md");
    dir
}

// ========== scout ==========

#[test]
fn scout_ultp_frame() {
    let dir = installed_project();
    cos_cmd()
        .arg("scout")
        .arg(dir.path())
        .arg("--ultp")
        .assert()
        .success()
        .stdout("[OS:A][L0:V;P:.ai-context-os/PROJECT_OS.md][L1:C,K][L2:js,py][M:X]\n");
}

#[test]
fn scout_report() {
    let dir = installed_project();
    cos_cmd()
        .arg("scout")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[ENVIRONMENT]"))
        .stdout(predicate::str::contains("Status   : ACTIVE"))
        .stdout(predicate::str::contains("GEMINI.md"))
        .stdout(predicate::str::contains("* py"));
}

#[test]
fn scout_json() {
    let dir = installed_project();
    let output = cos_cmd().arg("scout").arg(dir.path()).arg("--json").output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["environment"]["status"], "ACTIVE");
    assert_eq!(value["kernel"]["found"], true);
    assert_eq!(value["skills"], serde_json::json!(["js", "py"]));
}

#[test]
fn scout_ultp_and_json_conflict() {
    let dir = installed_project();
    cos_cmd().arg("scout").arg(dir.path()).args(["--ultp", "--json"]).assert().failure();
}

#[test]
fn scout_ready_payload() {
    let dir = installed_project();
    write(
        dir.path(),
        ".ai-context-os/PROJECT_OS.md",
        "# Project OS\n<!-- internal -->\n## Laws\n- Files must use kebab-case.\n",
    );
    let output = cos_cmd().arg("scout").arg(dir.path()).arg("--ready").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.trim().split('\n').collect();

    assert!(lines[0].starts_with("[OS:A]"));
    assert!(lines[0].contains("[L0:V;P:.ai-context-os/PROJECT_OS.md]"));
    assert!(cos_ultp::validate(lines[0]));
    assert_eq!(lines[1], "---");
    assert_eq!(lines[2], "[PROJECT OS] [LAWS] !Files ! use kebab-case.");
}

#[test]
fn scout_ready_without_kernel() {
    let dir = TempDir::new().unwrap();
    cos_cmd()
        .arg("scout")
        .arg(dir.path())
        .arg("--ready")
        .assert()
        .success()
        .stdout("[OS:N][L0:X;P:][L1:][L2:][M:X]\n---\n");
}

#[test]
fn scout_ready_conflicts_with_ultp() {
    let dir = installed_project();
    cos_cmd().arg("scout").arg(dir.path()).args(["--ready", "--ultp"]).assert().failure();
}

#[test]
fn scout_empty_project() {
    let dir = TempDir::new().unwrap();
    cos_cmd()
        .arg("scout")
        .arg(dir.path())
        .arg("--ultp")
        .assert()
        .success()
        .stdout("[OS:N][L0:X;P:][L1:][L2:][M:X]\n");
}

#[test]
fn scout_with_config() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".os/KERNEL.md", "# K");
    let config = dir.path().join("cos.json");
    fs::write(&config, r#"{"layout": {"os_dirs": [".os"], "kernel_file": "KERNEL.md"}}"#).unwrap();
    cos_cmd()
        .arg("--config")
        .arg(&config)
        .arg("scout")
        .arg(dir.path())
        .arg("--ultp")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[OS:A][L0:V;P:.os/KERNEL.md]"));
}

#[test]
fn scout_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    cos_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.json"))
        .arg("scout")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

// ========== compress ==========

#[test]
fn compress_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("rules.md");
    fs::write(&input, "# Rules\n## Naming\n- Use kebab-case\nThis is a MANDATORY requirement.\n").unwrap();
    cos_cmd()
        .arg("compress")
        .arg(&input)
        .assert()
        .success()
        .stdout("[RULES] [NAMING] !Use kebab-case This !! REQ.\n");
}

#[test]
fn compress_stdin_with_stats() {
    cos_cmd()
        .args(["compress", "-", "--stats"])
        .write_stdin("Please ensure that the results are correct.")
        .assert()
        .success()
        .stdout("results correct.\n")
        .stderr(predicate::str::contains("smaller"));
}

#[test]
fn compress_missing_file() {
    let dir = TempDir::new().unwrap();
    cos_cmd()
        .arg("compress")
        .arg(dir.path().join("nope.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// ========== ultp ==========

#[test]
fn ultp_validate_valid() {
    cos_cmd()
        .args(["ultp", "validate", "[OS:A][L0:V;P:os.md][L1:C,K][L2:js,py][M:X]"])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn ultp_validate_invalid() {
    cos_cmd()
        .args(["ultp", "validate", "[OS:Z][L0:V;P:os.md][L1:][L2:][M:X]"])
        .assert()
        .code(1)
        .stdout("invalid\n");
}

#[test]
fn ultp_decode() {
    let output = cos_cmd()
        .args(["ultp", "decode", "[OS:D][L0:V;P:os.md][L1:C,K][L2:js,py][M:V]"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["os"], "Dogfooding");
    assert_eq!(value["kernel"]["path"], "os.md");
    assert_eq!(value["adapters"], serde_json::json!(["C", "K"]));
    assert_eq!(value["memory"]["found"], true);
}

#[test]
fn ultp_decode_invalid() {
    cos_cmd()
        .args(["ultp", "decode", "garbage"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a valid ULTP frame"));
}
