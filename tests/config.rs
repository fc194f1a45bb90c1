use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use qsize::config::Config;
use qsize::error::AppError;
use qsize::format::OverflowPolicy;
use std::fs;

fn command() -> Command {
    Command::cargo_bin("qsize").expect("binary exists")
}

#[test]
fn config_overflow_persists_and_applies_to_format() {
    let temp = assert_fs::TempDir::new().unwrap();
    let home = temp.child("home");
    home.create_dir_all().unwrap();
    let config_root = temp.child("xdg-config");
    config_root.create_dir_all().unwrap();

    let mut config_cmd = command();
    config_cmd
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .arg("--overflow")
        .arg("blank");
    config_cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("Overflow policy set to 'blank'"));

    let config_path = config_root.child("qsize/config.toml");
    let contents = fs::read_to_string(config_path.path()).unwrap();
    assert!(contents.contains("overflow = \"blank\""));

    let mut format_cmd = command();
    format_cmd
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("format")
        .arg("1152921504606846976")
        .arg("1024");
    format_cmd.assert().success().stdout("\n1.0 kB\n");
}

#[test]
fn config_path_points_into_xdg_config_home() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_root = temp.child("xdg-config");

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .arg("--path");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Configuration file"))
        .stdout(predicate::str::contains("qsize/config.toml"));
}

#[test]
fn config_without_flags_shows_current_policy() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("config");

    cmd.assert().success().stdout(predicate::str::contains("overflow = clamp"));
}

#[test]
fn malformed_config_fails_format() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_root = temp.child("config");
    config_root.child("qsize/config.toml").write_str("overflow = [").unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("format")
        .arg("1024");

    cmd.assert().failure().stderr(predicate::str::contains("Failed to parse configuration"));
}

#[test]
fn config_edit_creates_default_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_root = temp.child("config");

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .env("EDITOR", "true")
        .arg("config")
        .arg("--edit");
    cmd.assert().success();

    let contents = fs::read_to_string(config_root.child("qsize/config.toml").path()).unwrap();
    assert!(contents.contains("overflow = \"clamp\""));
}

#[test]
fn config_edit_passes_editor_arguments() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .env("EDITOR", "true --wait")
        .arg("config")
        .arg("--edit");

    cmd.assert().success();
}

#[test]
fn config_edit_reports_failing_editor() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .env("EDITOR", "false")
        .arg("config")
        .arg("--edit");

    cmd.assert().code(1).stderr(predicate::str::contains("Failed to launch editor"));
}

#[test]
fn empty_config_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.overflow, OverflowPolicy::Clamp);
}

#[test]
fn overflow_policy_is_read_from_toml() {
    let config = Config::from_toml("overflow = \"blank\"\n").unwrap();
    assert_eq!(config.formatter().overflow(), OverflowPolicy::Blank);
}

#[test]
fn unknown_policy_in_toml_is_a_parse_error() {
    let err = Config::from_toml("overflow = \"wrap\"\n").unwrap_err();
    assert!(matches!(err, AppError::ConfigParse(_)));
}
