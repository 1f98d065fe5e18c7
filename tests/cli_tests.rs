//! CLI behavior tests
//!
//! Every test points the binary at a config file inside a temporary
//! directory through `--config`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn propstore(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("propstore").unwrap();
    cmd.arg("--config").arg(config).env_remove("PROPSTORE_CONFIG");
    cmd
}

#[test]
fn test_set_get_unset_cycle() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.php");

    propstore(&config)
        .args(["set", "sitename", "My Site", "--group", "general"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"));

    assert!(config.exists());

    propstore(&config)
        .args(["get", "sitename", "--group", "general"])
        .assert()
        .success()
        .stdout("My Site\n");

    propstore(&config)
        .args(["unset", "sitename", "--group", "general"])
        .assert()
        .success();

    propstore(&config)
        .args(["get", "sitename", "--group", "general"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not set"));
}

#[test]
fn test_show_prints_literal_form() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.php");

    propstore(&config)
        .args(["set", "sitename", "My Site", "-g", "general"])
        .assert()
        .success();

    propstore(&config)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("array("))
        .stdout(predicate::str::contains("###### GENERAL ######"))
        .stdout(predicate::str::contains("'sitename' => 'My Site',"));

    let on_disk = fs::read_to_string(&config).unwrap();
    assert!(on_disk.contains("'general' => array("));
}

#[test]
fn test_lowercase_flag() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.php");

    propstore(&config)
        .args(["--lowercase", "set", "SiteName", "x", "--group", "General"])
        .assert()
        .success();

    propstore(&config)
        .args(["--lowercase", "get", "SITENAME", "--group", "general"])
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn test_shape_conflict_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.php");

    propstore(&config)
        .args(["set", "debug", "1"])
        .assert()
        .success();

    propstore(&config)
        .args(["set", "level", "2", "--group", "debug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already holds a value"));
}

#[test]
fn test_import_and_list_json() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.php");
    let import = temp_dir.path().join("settings.json");
    fs::write(
        &import,
        r#"{"region": {"timezone": "+10:00", "dst": null}, "debug": "1"}"#,
    )
    .unwrap();

    propstore(&config)
        .arg("import")
        .arg(&import)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported"));

    let output = propstore(&config)
        .args(["--json", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let listed: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(listed["region"]["timezone"], "+10:00");
    assert_eq!(listed["region"]["dst"], "");
    assert_eq!(listed["debug"], "1");
}

#[test]
fn test_flush_requires_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.php");

    propstore(&config)
        .args(["set", "debug", "1"])
        .assert()
        .success();

    propstore(&config).arg("flush").assert().failure();

    propstore(&config)
        .args(["flush", "--yes"])
        .assert()
        .success();

    propstore(&config)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No settings stored"));
}

#[test]
fn test_path_reports_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.php");

    propstore(&config)
        .args(["--json", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"exists\":false"));
}
