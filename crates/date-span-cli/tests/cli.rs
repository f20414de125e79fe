use assert_cmd::Command;
use predicates::prelude::*;

fn datespan() -> Command {
    let mut cmd = Command::cargo_bin("datespan").unwrap();
    cmd.env_remove("DATESPAN_TIMEZONE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_between_two_days() {
    datespan()
        .args(["between", "--start-date", "2024-01-01", "--end-date", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From: 1/1/2024"))
        .stdout(predicate::str::contains("To:   1/3/2024"))
        .stdout(predicate::str::contains("Days: 2 day(s)"))
        .stdout(predicate::str::contains("OR:   48 hours"));
}

#[test]
fn test_between_include_end_day() {
    datespan()
        .args([
            "between",
            "--start-date",
            "2024-01-01",
            "--end-date",
            "2024-01-03",
            "--include-end-day",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Days: 3 day(s)"))
        .stdout(predicate::str::contains("OR:   48 hours"));
}

#[test]
fn test_between_same_day_json() {
    let output = datespan()
        .args([
            "between",
            "--start-date",
            "2024-01-01",
            "--start-time",
            "09:00",
            "--end-date",
            "2024-01-01",
            "--end-time",
            "15:00",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["days"], 0);
    assert_eq!(json["hours"], 6);
}

#[test]
fn test_between_missing_end_date_is_not_an_error() {
    datespan()
        .args(["between", "--start-date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No result"));
}

#[test]
fn test_between_missing_date_json_is_null() {
    datespan()
        .args(["between", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn test_between_invalid_date_fails() {
    datespan()
        .args(["between", "--start-date", "2024-02-30", "--end-date", "2024-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_between_days_do_not_change_result() {
    datespan()
        .args([
            "between",
            "--start-date",
            "2024-01-01",
            "--end-date",
            "2024-01-08",
            "--days",
            "M,W,Sa",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Days: 7 day(s)"))
        .stdout(predicate::str::contains("Days to include: M W S"));
}

#[test]
fn test_between_include_all_days_hides_selection() {
    datespan()
        .args([
            "between",
            "--start-date",
            "2024-01-01",
            "--end-date",
            "2024-01-08",
            "--days",
            "M",
            "--include-all-days",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Days: 7 day(s)"))
        .stdout(predicate::str::contains("Days to include").not());
}

#[test]
fn test_between_ambiguous_weekday_fails() {
    datespan()
        .args(["between", "--days", "S"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ambiguous"));
}

#[test]
fn test_timezone_flag_counts_dst_hours() {
    datespan()
        .args([
            "--timezone",
            "America/New_York",
            "between",
            "--start-date",
            "2024-03-09",
            "--end-date",
            "2024-03-10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Days: 1 day(s)"))
        .stdout(predicate::str::contains("OR:   23 hours"));
}

#[test]
fn test_timezone_env_var() {
    datespan()
        .env("DATESPAN_TIMEZONE", "America/New_York")
        .args(["between", "--start-date", "2024-11-02", "--end-date", "2024-11-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OR:   25 hours"));
}

#[test]
fn test_invalid_timezone_fails() {
    datespan()
        .args(["--timezone", "Mars/Olympus", "modes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn test_replay_from_stdin() {
    let events = r#"
# open the calculator and fill it in
{"event":"press_mode","value":"days_between"}
{"event":"set_start_date","value":"2024-01-01"}
{"event":"set_end_date","value":"2024-01-03"}
{"event":"toggle_include_end_day"}
{"event":"calculate"}
"#;
    datespan()
        .arg("replay")
        .write_stdin(events)
        .assert()
        .success()
        .stdout(predicate::str::contains("Days: 3 day(s)"));
}

#[test]
fn test_replay_keeps_stale_result() {
    let events = r#"
{"event":"press_mode","value":"days_between"}
{"event":"set_start_date","value":"2024-01-01"}
{"event":"set_end_date","value":"2024-01-03"}
{"event":"calculate"}
{"event":"set_end_date","value":"2024-01-10"}
"#;
    datespan()
        .args(["replay", "-"])
        .write_stdin(events)
        .assert()
        .success()
        .stdout(predicate::str::contains("Days: 2 day(s)"));
}

#[test]
fn test_replay_ignores_input_before_opening() {
    let events = r#"
{"event":"set_start_date","value":"2024-01-01"}
{"event":"set_end_date","value":"2024-01-03"}
{"event":"press_mode","value":"days_until"}
{"event":"calculate"}
"#;
    datespan()
        .arg("replay")
        .write_stdin(events)
        .assert()
        .success()
        .stdout(predicate::str::contains("No result"));
}

#[test]
fn test_replay_rejects_unknown_event() {
    datespan()
        .arg("replay")
        .write_stdin("{\"event\":\"copy\"}\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid event on line 1"));
}

#[test]
fn test_modes_lists_disabled_stubs() {
    datespan()
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Days Until... (disabled)"))
        .stdout(predicate::str::contains("Days From Today (disabled)"))
        .stdout(predicate::str::contains("Days Between Dates\n"));
}
