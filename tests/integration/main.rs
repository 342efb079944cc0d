//! Integration tests for the checkstamp CLI
//!
//! These tests run the binary against real files in a temporary directory,
//! with an isolated config file per test.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a checkstamp command using an isolated config
fn checkstamp(config_dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("checkstamp"));
    cmd.env("NO_COLOR", "1")
        .env_remove("CHECKSTAMP_CONFIG")
        .arg("--config")
        .arg(config_path(config_dir));
    cmd
}

fn config_path(dir: &Path) -> PathBuf {
    dir.join("config.toml")
}

fn write_note(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("checkstamp"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Append a completion stamp"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("checkstamp v"));
}

// =============================================================================
// LINE
// =============================================================================

#[test]
fn test_line_appends_stamp() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .args(["line", "- [x] Buy groceries", "--at", "2026-02-07 14:30"])
        .assert()
        .success()
        .stdout("- [x] Buy groceries ✅ 2026-02-07\n");
}

#[test]
fn test_line_json_output() {
    let temp = TempDir::new().unwrap();
    let output = checkstamp(temp.path())
        .args(["--json", "line", "- [ ] Buy groceries ✅ 2026-02-07", "--at", "2026-02-07 14:30"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["action"], "remove");
    assert_eq!(json["state"], "unchecked-stamped");
    assert_eq!(json["result"], "- [ ] Buy groceries");
}

#[test]
fn test_line_respects_default_exclusion() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .args(["line", "- [x] #task Buy milk"])
        .assert()
        .success()
        .stdout("- [x] #task Buy milk\n");
}

#[test]
fn test_line_rejects_bad_time() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .args(["line", "- [x] a", "--at", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --at value"));
}

// =============================================================================
// STAMP
// =============================================================================

#[test]
fn test_stamp_file() {
    let temp = TempDir::new().unwrap();
    let note = write_note(
        temp.path(),
        "todo.md",
        "# Today\n- [x] Buy groceries\n- [ ] Walk dog\n- [ ] Call mum ✅ 2026-02-01\n",
    );

    checkstamp(temp.path())
        .args(["stamp", "--at", "2026-02-07 14:30"])
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("Stamped 1 item(s), cleared 1 stamp(s) in 1 file(s)."));

    assert_eq!(
        fs::read_to_string(&note).unwrap(),
        "# Today\n- [x] Buy groceries ✅ 2026-02-07\n- [ ] Walk dog\n- [ ] Call mum\n"
    );
}

#[test]
fn test_stamp_dry_run_leaves_file() {
    let temp = TempDir::new().unwrap();
    let note = write_note(temp.path(), "todo.md", "- [x] Buy groceries\n");

    checkstamp(temp.path())
        .args(["stamp", "--dry-run", "--at", "2026-02-07 14:30"])
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("Would stamp 1 item(s)"));

    assert_eq!(fs::read_to_string(&note).unwrap(), "- [x] Buy groceries\n");
}

#[test]
fn test_stamp_selected_lines_only() {
    let temp = TempDir::new().unwrap();
    let note = write_note(temp.path(), "todo.md", "- [x] a\n- [x] b\n");

    checkstamp(temp.path())
        .args(["stamp", "--line", "2", "--at", "2026-02-07 14:30"])
        .arg(&note)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&note).unwrap(), "- [x] a\n- [x] b ✅ 2026-02-07\n");
}

#[test]
fn test_stamp_line_zero_rejected() {
    let temp = TempDir::new().unwrap();
    let note = write_note(temp.path(), "todo.md", "- [x] a\n");

    checkstamp(temp.path())
        .args(["stamp", "--line", "0"])
        .arg(&note)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line numbers start at 1"));
}

#[test]
fn test_stamp_directory() {
    let temp = TempDir::new().unwrap();
    let vault = temp.path().join("vault");
    write_note(&vault, "a.md", "- [x] one\n");
    write_note(&vault, "daily/b.md", "- [x] two\n");
    write_note(&vault, "c.txt", "- [x] three\n");

    let output = checkstamp(temp.path())
        .args(["--json", "stamp", "--at", "2026-02-07 14:30"])
        .arg(&vault)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
    assert_eq!(fs::read_to_string(vault.join("c.txt")).unwrap(), "- [x] three\n");
    assert_eq!(fs::read_to_string(vault.join("daily/b.md")).unwrap(), "- [x] two ✅ 2026-02-07\n");
}

#[test]
fn test_stamp_line_with_directory_rejected() {
    let temp = TempDir::new().unwrap();
    write_note(temp.path(), "notes/a.md", "- [x] one\n");

    checkstamp(temp.path())
        .args(["stamp", "--line", "1"])
        .arg(temp.path().join("notes"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("single file"));
}

#[test]
fn test_stamp_missing_path() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .args(["stamp"])
        .arg(temp.path().join("nope.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_stamp_keeps_untouched_line_endings() {
    let temp = TempDir::new().unwrap();
    let note = write_note(temp.path(), "todo.md", "# notes\r\n- [x] a\n- [ ] b\n");

    checkstamp(temp.path())
        .args(["stamp", "--at", "2026-02-07 14:30"])
        .arg(&note)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&note).unwrap(),
        "# notes\r\n- [x] a ✅ 2026-02-07\n- [ ] b\n"
    );
}

#[test]
fn test_stamp_stdin_to_stdout() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .args(["stamp", "-", "--at", "2026-02-07 14:30"])
        .write_stdin("- [x] a\r\n- [ ] b ✅ 2026-02-01\n")
        .assert()
        .success()
        .stdout("- [x] a ✅ 2026-02-07\r\n- [ ] b\n");
}

#[test]
fn test_stamp_stdin_rejects_json() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .args(["--json", "stamp", "-"])
        .write_stdin("- [x] a\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("stdin"));
}

#[test]
fn test_unsupported_date_format_warns_once_per_run() {
    let temp = TempDir::new().unwrap();
    write_note(temp.path(), "notes/a.md", "- [x] one\n- [x] two\n");
    write_note(temp.path(), "notes/b.md", "- [x] three\n");

    checkstamp(temp.path())
        .args(["config", "set", "date_format", "DD.MM.YYYY"])
        .assert()
        .success();

    checkstamp(temp.path())
        .env("RUST_LOG", "warn")
        .args(["stamp", "--at", "2026-02-07 14:30"])
        .arg(temp.path().join("notes"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Stamped 3 item(s)"))
        .stderr(predicate::function(|err: &str| err.matches("is not supported").count() == 1));
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn test_config_show_defaults() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("include_time:     false"))
        .stdout(predicate::str::contains("#task"));
}

#[test]
fn test_config_set_persists() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .args(["config", "set", "include_time", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set include_time = true"));

    let content = fs::read_to_string(config_path(temp.path())).unwrap();
    assert!(content.contains("include_time = true"));

    checkstamp(temp.path())
        .args(["line", "- [x] a", "--at", "2026-02-07 09:05"])
        .assert()
        .success()
        .stdout("- [x] a ✅ 2026-02-07 09:05\n");
}

#[test]
fn test_config_set_unknown_key() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .args(["config", "set", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown setting"));
}

#[test]
fn test_config_exclude_add_remove() {
    let temp = TempDir::new().unwrap();
    checkstamp(temp.path())
        .args(["config", "exclude", "add", "#someday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added exclusion pattern: #someday"));

    checkstamp(temp.path())
        .args(["line", "- [x] #someday learn piano"])
        .assert()
        .success()
        .stdout("- [x] #someday learn piano\n");

    checkstamp(temp.path())
        .args(["config", "exclude", "remove", "#task"])
        .assert()
        .success();

    let output = checkstamp(temp.path()).args(["--json", "config"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["settings"]["exclude_patterns"], serde_json::json!(["#someday"]));
}

#[test]
fn test_config_disabled_skips_stamping() {
    let temp = TempDir::new().unwrap();
    let note = write_note(temp.path(), "todo.md", "- [x] a\n");

    checkstamp(temp.path())
        .args(["config", "set", "enabled", "false"])
        .assert()
        .success();

    checkstamp(temp.path()).arg("stamp").arg(&note).assert().success();
    assert_eq!(fs::read_to_string(&note).unwrap(), "- [x] a\n");
}
