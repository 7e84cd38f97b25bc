//! Integration tests for the stepform binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ENTRIES: &[(&str, &str)] = &[
    ("STEPFORM_PROMPT_FIRSTNAME", "Ada"),
    ("STEPFORM_PROMPT_LASTNAME", "Lovelace"),
    ("STEPFORM_PROMPT_EMAIL", "ada@example.com"),
    ("STEPFORM_PROMPT_COUNTRY", "United Kingdom"),
    ("STEPFORM_PROMPT_STATE", "Greater London"),
    ("STEPFORM_PROMPT_CITY", "London"),
    ("STEPFORM_PROMPT_STREET", "12 St James's Square"),
    ("STEPFORM_PROMPT_ZIP", "SW1Y 4JH"),
];

fn stepform(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("stepform"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn filled(dir: &TempDir) -> Command {
    let mut cmd = stepform(dir);
    cmd.envs(ENTRIES.iter().copied());
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    stepform(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("multi-step"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    stepform(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn fill_non_interactive_submits_payload() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    filled(&temp)
        .args(["fill", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"firstName\": \"Ada\""))
        .stdout(predicate::str::contains("\"zip\": \"SW1Y 4JH\""))
        .stdout(predicate::str::contains("Thank you for your submission."));
    Ok(())
}

#[test]
fn fill_verbose_echoes_entered_values() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    filled(&temp)
        .args(["fill", "--non-interactive", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("│ First name"))
        .stdout(predicate::str::contains("│ Postal Code │ SW1Y 4JH"));
    Ok(())
}

#[test]
fn fill_normal_output_hides_values_table() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    filled(&temp)
        .args(["fill", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Postal Code").not());
    Ok(())
}

#[test]
fn fill_is_the_default_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    filled(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"lastName\": \"Lovelace\""));
    Ok(())
}

#[test]
fn fill_yaml_payload() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    filled(&temp)
        .args(["fill", "--non-interactive", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("firstName: Ada"));
    Ok(())
}

#[test]
fn fill_with_missing_entries_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    stepform(&temp)
        .args(["fill", "--non-interactive"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "[invalid] First name: First name is required",
        ))
        .stderr(predicate::str::contains("[warn] Please Check your Entries"));
    Ok(())
}

#[test]
fn fill_with_invalid_email_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    filled(&temp)
        .env("STEPFORM_PROMPT_EMAIL", "ada-at-example")
        .args(["fill", "--non-interactive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email address"))
        .stdout(predicate::str::contains("\"firstName\"").not());
    Ok(())
}

#[test]
fn fill_quit_action_skips_submission() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    filled(&temp)
        .env("STEPFORM_PROMPT_ACTION", "quit")
        .env("STEPFORM_PROMPT_CONFIRM_QUIT", "yes")
        .args(["fill", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"firstName\"").not());
    Ok(())
}

#[test]
fn config_sets_payload_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("stepform.yml"),
        "settings:\n  payload_format: yaml\n",
    )?;
    filled(&temp)
        .args(["fill", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("city: London"));
    Ok(())
}

#[test]
fn missing_explicit_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    stepform(&temp)
        .args(["--config", "missing.yml", "steps"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("stepform.yml"), "settings:\n  output: loud\n")?;
    stepform(&temp)
        .arg("steps")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
    Ok(())
}

#[test]
fn steps_lists_registry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    stepform(&temp)
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal Information"))
        .stdout(predicate::str::contains("firstName, lastName, email"));
    Ok(())
}

#[test]
fn steps_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = stepform(&temp).args(["steps", "--json"]).output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert_eq!(value[1]["name"], "Address");
    Ok(())
}

#[test]
fn validate_accepts_valid_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("entries.yml"),
        "firstName: Ada\nlastName: Lovelace\nemail: ada@example.com\n",
    )?;
    stepform(&temp)
        .args(["validate", "entries.yml", "--step", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all entries valid"));
    Ok(())
}

#[test]
fn validate_reports_invalid_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("entries.json"),
        r#"{"firstName": "Ada", "email": "nope"}"#,
    )?;
    stepform(&temp)
        .args(["validate", "entries.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please Check your Entries"))
        .stderr(predicate::str::contains("Last name: Last name is required"))
        .stderr(predicate::str::contains("Email: Invalid email address"));
    Ok(())
}

#[test]
fn validate_rejects_out_of_range_step() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("entries.json"), "{}")?;
    stepform(&temp)
        .args(["validate", "entries.json", "--step", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    stepform(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stepform"));
    Ok(())
}

#[test]
fn unknown_subcommand_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    stepform(&temp).arg("submit").assert().failure();
    Ok(())
}
