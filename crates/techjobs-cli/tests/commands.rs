//! Tests for the subcommand handlers against a CSV on disk.

use std::path::PathBuf;

use serde_json::Value;
use techjobs_cli::commands::{exit_code, open_store, run_all, run_columns, run_list, run_search};
use techjobs_cli::output::OutputFormat;
use techjobs_core::{DataSourceConfig, JobData};
use tempfile::TempDir;

const CSV: &str = "Employer,Skill\nAcme Go,Rust\nGlobex,Go\n";

fn write_csv(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("jobs.csv");
    std::fs::write(&path, CSV).expect("write csv");
    path
}

fn store(dir: &TempDir) -> JobData {
    open_store(DataSourceConfig::new("unused.csv"), Some(write_csv(dir)))
}

fn employers(json: &str) -> Vec<String> {
    let rows: Vec<Value> = serde_json::from_str(json).expect("parse json");
    rows.iter()
        .map(|row| row["Employer"].as_str().expect("employer").to_string())
        .collect()
}

#[test]
fn list_renders_distinct_values_as_json() {
    let dir = TempDir::new().expect("tempdir");
    let jobs = store(&dir);

    let json = run_list(&jobs, "Employer", OutputFormat::Json).expect("list");

    insta::assert_snapshot!(json, @r#"
    [
      "Acme Go",
      "Globex"
    ]
    "#);
}

#[test]
fn all_renders_every_row() {
    let dir = TempDir::new().expect("tempdir");
    let jobs = store(&dir);

    let json = run_all(&jobs, OutputFormat::Json).expect("all");

    assert_eq!(employers(&json), ["Acme Go", "Globex"]);
}

#[test]
fn search_with_column_only_checks_that_column() {
    let dir = TempDir::new().expect("tempdir");
    let jobs = store(&dir);

    let json = run_search(&jobs, "go", Some("Skill"), OutputFormat::Json).expect("search");

    let rows: Vec<Value> = serde_json::from_str(&json).expect("parse json");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Employer"], "Globex");
    assert_eq!(rows[0]["Skill"], "Go");
}

#[test]
fn search_without_column_checks_every_column() {
    let dir = TempDir::new().expect("tempdir");
    let jobs = store(&dir);

    let json = run_search(&jobs, "GO", None, OutputFormat::Json).expect("search");

    assert_eq!(employers(&json), ["Acme Go", "Globex"]);
}

#[test]
fn search_with_no_matches_prints_notice() {
    let dir = TempDir::new().expect("tempdir");
    let jobs = store(&dir);

    let rendered = run_search(&jobs, "Cobol", None, OutputFormat::Table).expect("search");

    assert_eq!(rendered, techjobs_cli::output::NO_RESULTS);
}

#[test]
fn column_differing_only_in_case_gets_a_hint() {
    let dir = TempDir::new().expect("tempdir");
    let jobs = store(&dir);

    let result = run_list(&jobs, "employer", OutputFormat::Json);

    let message = format!("{:#}", result.as_ref().expect_err("unknown column"));
    assert!(message.contains("did you mean 'Employer'?"), "{message}");
    assert_eq!(exit_code(&result), 1);

    let result = run_search(&jobs, "go", Some("skill"), OutputFormat::Json);
    let message = format!("{:#}", result.as_ref().expect_err("unknown column"));
    assert!(message.contains("did you mean 'Skill'?"), "{message}");
}

#[test]
fn unrelated_column_has_no_hint() {
    let dir = TempDir::new().expect("tempdir");
    let jobs = store(&dir);

    let result = run_list(&jobs, "Salary", OutputFormat::Json);

    let message = format!("{:#}", result.as_ref().expect_err("unknown column"));
    assert!(!message.contains("did you mean"), "{message}");
    assert!(message.contains("Employer, Skill"), "{message}");
}

#[test]
fn missing_file_fails_with_nonzero_exit() {
    let dir = TempDir::new().expect("tempdir");
    let jobs = open_store(
        DataSourceConfig::new("unused.csv"),
        Some(dir.path().join("missing.csv")),
    );

    let result = run_all(&jobs, OutputFormat::Json);

    assert!(result.is_err());
    assert_eq!(exit_code(&result), 1);
}

#[test]
fn successful_command_exits_zero() {
    let dir = TempDir::new().expect("tempdir");
    let jobs = store(&dir);

    let result = run_columns(&jobs, OutputFormat::Json);

    assert_eq!(exit_code(&result), 0);
    let columns: Vec<String> =
        serde_json::from_str(&result.expect("columns")).expect("parse json");
    assert_eq!(columns, ["Employer", "Skill"]);
}

#[test]
fn data_flag_overrides_configured_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_csv(&dir);

    let jobs = open_store(DataSourceConfig::new("env.csv"), Some(path.clone()));
    assert_eq!(jobs.config().path(), path.as_path());

    let jobs = open_store(DataSourceConfig::new("env.csv"), None);
    assert_eq!(jobs.config().path(), std::path::Path::new("env.csv"));
}
