use std::fs;
use std::path::Path;

use candrec_cli::exit_codes::{EXIT_INPUT, EXIT_INVALID_CONFIG, EXIT_OUTPUT};
use candrec_cli::run::{cmd_run, cmd_validate};

const INTERVIEWS: &str = "\
Name,Candidate__c,Interviewer_s__c,Interview_Type__c,Date_Completed__c,Date_Time_Scheduled__c,Interview_Status__c
Alice Smith - Onsite,a02000000000001,Pat Reviewer,Onsite,,2026-02-09T14:00:00,Scheduled
Bob Jones - Phone,a02000000000002,Sam Screener,Phone Screen,,2026-02-12T10:00:00,Scheduled
Test Candidate 1 - Screen,a02000000000003,Sam Screener,Phone Screen,,2026-02-13T10:00:00,Scheduled
";

fn write_workspace(dir: &Path, known_names: &str) -> std::path::PathBuf {
    let config = format!(
        r#"
name = "CLI test"
known_names = [{known_names}]

[input]
file = "all_interviews.csv"

[output]
file = "unmatched_interviews.csv"
"#
    );
    let config_path = dir.join("recon.toml");
    fs::write(&config_path, config).unwrap();
    fs::write(dir.join("all_interviews.csv"), INTERVIEWS).unwrap();
    config_path
}

#[test]
fn run_writes_unmatched_report() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_workspace(dir.path(), "\"Alice Smith\"");

    cmd_run(config_path, false, None, true).unwrap();

    let report = fs::read_to_string(dir.path().join("unmatched_interviews.csv")).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines[0],
        "Interview_Name,Candidate_Name,Old_Candidate_ID,Interviewer,\
         Interview_Type,Date_Completed,Date_Scheduled,Status"
    );
    assert!(lines[1].starts_with("Bob Jones - Phone,Bob Jones,a02000000000002,"));
    assert!(lines[2].starts_with("Test Candidate 1 - Screen,Test Candidate 1,"));
    assert_eq!(lines.len(), 3);
}

#[test]
fn run_with_everything_matched_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_workspace(
        dir.path(),
        "\"Alice Smith\", \"Bob Jones\", \"Test Candidate 1\"",
    );

    cmd_run(config_path, false, None, true).unwrap();

    // Zero unmatched: not even a header-only file is created
    assert!(!dir.path().join("unmatched_interviews.csv").exists());
}

#[test]
fn run_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_workspace(dir.path(), "\"Alice Smith\"");
    let report_path = dir.path().join("unmatched_interviews.csv");

    cmd_run(config_path.clone(), false, None, true).unwrap();
    let first = fs::read(&report_path).unwrap();

    cmd_run(config_path, false, None, true).unwrap();
    let second = fs::read(&report_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn run_json_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_workspace(dir.path(), "\"Alice Smith\"");
    let json_path = dir.path().join("result.json");

    cmd_run(config_path, false, Some(json_path.clone()), true).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["meta"]["config_name"], "CLI test");
    assert_eq!(json["summary"]["total_unmatched"], 2);
    assert_eq!(json["summary"]["test_candidates"], 1);
    assert_eq!(json["summary"]["other"], 1);
    assert_eq!(json["unmatched"][0]["candidate_name"], "Bob Jones");
}

#[test]
fn run_missing_input_is_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_workspace(dir.path(), "\"Alice Smith\"");
    fs::remove_file(dir.path().join("all_interviews.csv")).unwrap();

    let err = cmd_run(config_path, false, None, true).unwrap_err();
    assert_eq!(err.code, EXIT_INPUT);
    assert!(err.message.contains("all_interviews.csv"));
}

#[test]
fn run_missing_column_is_input_error_naming_column() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_workspace(dir.path(), "\"Alice Smith\"");
    fs::write(
        dir.path().join("all_interviews.csv"),
        "Name,Candidate__c\nAlice Smith - Onsite,a02x\n",
    )
    .unwrap();

    let err = cmd_run(config_path, false, None, true).unwrap_err();
    assert_eq!(err.code, EXIT_INPUT);
    assert!(err.message.contains("Interviewer_s__c"));
    assert!(err.hint.is_some());
}

#[test]
fn run_unwritable_report_path_is_output_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = r#"
name = "CLI test"
known_names = ["Alice Smith"]

[input]
file = "all_interviews.csv"

[output]
file = "no_such_dir/unmatched_interviews.csv"
"#;
    let config_path = dir.path().join("recon.toml");
    fs::write(&config_path, config).unwrap();
    fs::write(dir.path().join("all_interviews.csv"), INTERVIEWS).unwrap();

    let err = cmd_run(config_path, false, None, true).unwrap_err();
    assert_eq!(err.code, EXIT_OUTPUT);
    assert!(err.message.contains("unmatched_interviews.csv"));
}

#[test]
fn run_bad_config_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("recon.toml");
    fs::write(&config_path, "name = \"broken").unwrap();

    let err = cmd_run(config_path, false, None, true).unwrap_err();
    assert_eq!(err.code, EXIT_INVALID_CONFIG);
}

#[test]
fn validate_accepts_good_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_workspace(dir.path(), "\"Alice Smith\"");
    cmd_validate(config_path).unwrap();
}

#[test]
fn validate_rejects_duplicate_known_names() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_workspace(dir.path(), "\"Alice Smith\", \"Alice Smith\"");

    let err = cmd_validate(config_path).unwrap_err();
    assert_eq!(err.code, EXIT_INVALID_CONFIG);
    assert!(err.message.contains("duplicate known name"));
}
