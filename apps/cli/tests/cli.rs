use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("parkpasses-constants").expect("binary should be built")
}

#[test]
fn get_prints_value() {
    cli().args(["get", "GST"]).assert().success().stdout("10\n");
    cli()
        .args(["get", "PARK_PASSES_SUPPORT_EMAIL"])
        .assert()
        .success()
        .stdout("park.passes@dbca.wa.gov.au\n");
}

#[test]
fn unknown_key_fails() {
    cli()
        .args(["get", "NOT_A_KEY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown constant key: NOT_A_KEY"));
}

#[test]
fn system_error_uses_support_email() {
    cli()
        .args(["error", "SYSTEM"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("contact us at: park.passes@dbca.wa.gov.au\n"));
}

#[test]
fn export_is_valid_json() {
    let output = cli().args(["export", "--pretty"]).output().expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json export");
    assert_eq!(value["GST"], 10);
    assert_eq!(value["ERRORS"].as_object().map(serde_json::Map::len), Some(3));
}

#[test]
fn config_overrides_support_email() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("constants.toml");
    fs::write(&path, "[overrides]\nPARK_PASSES_SUPPORT_EMAIL = \"help@example.org\"\n")?;

    cli()
        .arg("--config")
        .arg(&path)
        .args(["error", "SYSTEM"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("contact us at: help@example.org\n"));
    Ok(())
}

#[test]
fn keys_starts_with_gst() {
    cli().arg("keys").assert().success().stdout(predicate::str::starts_with("GST\n"));
}

#[test]
fn environment_override_beats_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("constants.toml");
    fs::write(&path, "[overrides]\nGST = 11\n")?;

    cli()
        .env("PARKPASSES__OVERRIDES__GST", "13")
        .arg("--config")
        .arg(&path)
        .args(["get", "GST"])
        .assert()
        .success()
        .stdout("13\n");
    Ok(())
}

#[test]
fn get_errors_prints_the_group() {
    cli()
        .args(["get", "ERRORS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CRITICAL: SYSTEM ERROR: Our System Administrators"));
}

#[test]
fn log_flag_enables_config_event() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("constants.toml");
    fs::write(&path, "[overrides]\nGST = 11\n")?;

    cli()
        .args(["--log", "info", "--config"])
        .arg(&path)
        .args(["get", "GST"])
        .assert()
        .success()
        .stdout("11\n")
        .stderr(predicate::str::contains("applying constants config"));
    Ok(())
}

#[test]
fn rust_log_applies_without_log_flag() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("constants.toml");
    fs::write(&path, "[overrides]\nGST = 11\n")?;

    cli()
        .env("RUST_LOG", "info")
        .arg("--config")
        .arg(&path)
        .args(["get", "GST"])
        .assert()
        .success()
        .stderr(predicate::str::contains("applying constants config"));

    cli()
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&path)
        .args(["get", "GST"])
        .assert()
        .success()
        .stderr(predicate::str::contains("applying constants config").not());
    Ok(())
}
