//! Integration tests for the obsolint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".obsolint");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), config).unwrap();
    temp
}

fn obsolint(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("obsolint"));
    cmd.current_dir(temp.path())
        .env("OBSOLINT_HOME", temp.path().join("home"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

const LEGACY_CONFIG: &str = r#"
options:
  remove_new_line_between_closing_brace_and_while_keyword: false
  add_new_line_after_equals_sign_instead_of_before_it: after
"#;

const CURRENT_CONFIG: &str = r#"
options:
  new_line_before_while_in_do_statement: false
  equals_token_new_line: after
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("obsolint"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("obsolete analyzer configuration options"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("obsolint"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_without_config_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    obsolint(&temp)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No configuration found"));
    Ok(())
}

#[test]
fn cli_clean_config_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CURRENT_CONFIG);
    obsolint(&temp)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No obsolete options found in 1 unit(s)"));
    Ok(())
}

#[test]
fn cli_no_args_runs_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(LEGACY_CONFIG);
    obsolint(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning[ROS0002]"));
    Ok(())
}

#[test]
fn cli_reports_replacements() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(LEGACY_CONFIG);
    obsolint(&temp)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "remove_new_line_between_closing_brace_and_while_keyword",
        ))
        .stdout(predicate::str::contains(
            "new_line_before_while_in_do_statement = false",
        ))
        .stdout(predicate::str::contains("equals_token_new_line = after"));
    Ok(())
}

#[test]
fn cli_strict_fails_on_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(LEGACY_CONFIG);
    obsolint(&temp).args(["check", "--strict"]).assert().code(1);
    Ok(())
}

#[test]
fn cli_error_severity_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        "analyzer:\n  severity:\n    ROS0002: error\noptions:\n  add_new_line_after_binary_operator_instead_of_before_it: after\n",
    );
    obsolint(&temp)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error[ROS0002]"));
    Ok(())
}

#[test]
fn cli_umbrella_off_reports_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        "analyzer:\n  suppress: [ROS0002]\noptions:\n  add_new_line_after_binary_operator_instead_of_before_it: after\n",
    );
    obsolint(&temp)
        .args(["check", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No obsolete options found"));
    Ok(())
}

#[test]
fn cli_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(LEGACY_CONFIG);
    let output = obsolint(&temp)
        .args(["check", "--format", "json"])
        .output()?;

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["summary"]["total"], 2);
    assert_eq!(parsed["diagnostics"][0]["rule_id"], "ROS0002");
    Ok(())
}

#[test]
fn cli_sarif_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(LEGACY_CONFIG);
    let output = obsolint(&temp)
        .args(["check", "--format", "sarif"])
        .output()?;

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["version"], "2.1.0");
    assert_eq!(parsed["runs"][0]["results"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn cli_override_globs_select_units() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        "overrides:\n  - files: \"legacy/*.cs\"\n    options:\n      remove_empty_line_between_single_line_accessors: false\n",
    );
    obsolint(&temp)
        .args(["check", "src/Program.cs", "legacy/Old.cs", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("legacy/Old.cs"))
        .stdout(predicate::str::contains("\"total\": 1"));
    Ok(())
}

#[test]
fn cli_dot_prefixed_paths_keep_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        "overrides:\n  - files: \"legacy/*.cs\"\n    options:\n      remove_empty_line_between_single_line_accessors: false\n",
    );
    obsolint(&temp)
        .args(["check", "./legacy/Old.cs", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 1"));
    Ok(())
}

#[test]
fn cli_parse_error_exits_1() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("options: [");
    obsolint(&temp)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
    Ok(())
}

#[test]
fn cli_config_flag_loads_single_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = temp.path().join("alt.yml");
    fs::write(&path, LEGACY_CONFIG)?;

    obsolint(&temp)
        .args(["check", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ROS0002"));
    Ok(())
}

#[test]
fn cli_rules_lists_options() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    obsolint(&temp)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "add_new_line_after_conditional_operator_instead_of_before_it -> conditional_operator_new_line = after",
        ));
    Ok(())
}

#[test]
fn cli_rules_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = obsolint(&temp).args(["rules", "--json"]).output()?;

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["umbrella"]["rule_id"], "ROS0002");
    assert_eq!(parsed["options"].as_array().map(Vec::len), Some(7));
    Ok(())
}

#[test]
fn cli_schema_prints_json_schema() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = obsolint(&temp).arg("schema").output()?;

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["title"], "obsolint Configuration");
    Ok(())
}
