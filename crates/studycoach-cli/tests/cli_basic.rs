//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against a throwaway HOME so state and
//! config never touch the real user directory.

use std::process::Command;

fn run_cli(home: &tempfile::TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_studycoach"))
        .env("HOME", home.path())
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_score_predict() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(&home, &["score", "predict", "80", "90", "--exam", "75"]);
    assert_eq!(code, 0, "score predict failed");
    assert_eq!(stdout.trim(), "81");
}

#[test]
fn test_score_predict_without_scores() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(&home, &["score", "predict"]);
    assert_eq!(code, 0, "score predict failed");
    assert_eq!(stdout.trim(), "0");
}

#[test]
fn test_score_lock_in_without_exam_date() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(&home, &["score", "lock-in"]);
    assert_eq!(code, 0, "score lock-in failed");
    assert!(stdout.contains("5"));
    assert!(stdout.contains("not set"));
}

#[test]
fn test_score_target_roundtrip() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(&home, &["score", "target"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "75");

    let (_, _, code) = run_cli(&home, &["score", "target", "88"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(&home, &["score", "target"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "88");
}

#[test]
fn test_schedule_add_and_list() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(
        &home,
        &["schedule", "add", "fractions worksheet", "--date", "2026-04-01"],
    );
    assert_eq!(code, 0, "schedule add failed");

    let (stdout, _, code) = run_cli(&home, &["schedule", "list", "2026-04-01"]);
    assert_eq!(code, 0, "schedule list failed");
    assert!(stdout.contains("fractions worksheet"));
}

#[test]
fn test_schedule_add_rejects_bad_date() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(&home, &["schedule", "add", "x", "--date", "04/01/2026"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("not a calendar date"));
}

#[test]
fn test_schedule_exam_date_roundtrip() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(&home, &["schedule", "exam-date"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("not set"));

    let (_, _, code) = run_cli(&home, &["schedule", "exam-date", "2026-11-05"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(&home, &["schedule", "exam-date"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "2026-11-05");
}

#[test]
fn test_schedule_overview() {
    let home = tempfile::tempdir().unwrap();
    for day in ["2026-04-01", "2026-04-02"] {
        let (_, _, code) = run_cli(&home, &["schedule", "add", "revision", "--date", day]);
        assert_eq!(code, 0);
    }
    let (stdout, _, code) = run_cli(&home, &["schedule", "overview"]);
    assert_eq!(code, 0, "schedule overview failed");
    assert!(stdout.contains("2026-04-02"));
    assert!(stdout.contains("2026-04-01"));
}

#[test]
fn test_auth_signup_and_whoami() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(&home, &["auth", "whoami"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("not signed in"));

    let (_, _, code) = run_cli(&home, &["auth", "signup", "Ada", "ada@example.com", "pw"]);
    assert_eq!(code, 0, "auth signup failed");

    let (stdout, _, code) = run_cli(&home, &["auth", "whoami"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("ada@example.com"));

    let (_, _, code) = run_cli(&home, &["auth", "logout"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(&home, &["auth", "whoami"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("not signed in"));
}

#[test]
fn test_auth_login_rejects_wrong_password() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(&home, &["auth", "signup", "Ada", "ada@example.com", "right"]);
    assert_eq!(code, 0);
    let (_, stderr, code) = run_cli(&home, &["auth", "login", "ada@example.com", "wrong"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error"));
}

#[test]
fn test_config_get() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(&home, &["config", "get", "proxy.base_url"]);
    assert_eq!(code, 0, "config get failed");
    assert!(stdout.contains("http://localhost:8787"));
}

#[test]
fn test_config_set() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(&home, &["config", "set", "proxy.timeout_secs", "45"]);
    assert_eq!(code, 0, "config set failed");
    let (stdout, _, code) = run_cli(&home, &["config", "get", "proxy.timeout_secs"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "45");
}

#[test]
fn test_config_list() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(&home, &["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}
