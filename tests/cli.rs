#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn cli(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gardes-cli").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn generate_then_show_and_distribute() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("tables");

    cli(&data)
        .args(["set-doctors", "--names", "Alice, Bob,Chloe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 doctor(s) saved"));

    cli(&data)
        .args(["generate", "--start", "2025-10-06", "--months", "1", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("31 day(s) scheduled, 0 skipped (seed 7)"));

    cli(&data)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-10-06 | Weekday |"))
        .stdout(predicate::str::contains("2025-11-05"))
        .stdout(predicate::str::contains("2025-11-06").not());

    let out_csv = dir.path().join("distribution.csv");
    cli(&data)
        .arg("distribution")
        .arg("--out-csv")
        .arg(&out_csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Doctor | Total Duties | Weekdays"))
        .stdout(predicate::str::contains("Chloe |"));
    let exported = std::fs::read_to_string(&out_csv).unwrap();
    assert!(exported.starts_with("Doctor,Total Duties,Weekdays,Saturdays,Sundays,12-hour,24-hour"));
    assert_eq!(exported.lines().count(), 4);

    cli(&data)
        .arg("clear-schedule")
        .assert()
        .success();
    cli(&data)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No schedule generated yet"));
    cli(&data)
        .arg("distribution")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available"))
        .stdout(predicate::str::contains("Doctor | Total Duties").not());
}

#[test]
fn distribution_needs_a_schedule() {
    let dir = tempdir().unwrap();
    cli(dir.path())
        .args(["set-doctors", "--names", "Alice,Bob"])
        .assert()
        .success();
    cli(dir.path())
        .arg("distribution")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available"))
        .stdout(predicate::str::contains("Doctor | Total Duties").not());
}

#[test]
fn skipped_days_exit_with_warning_code() {
    let dir = tempdir().unwrap();
    let data = dir.path();

    cli(data)
        .args(["set-doctors", "--names", "Alice,Bob"])
        .assert()
        .success();
    cli(data)
        .args(["add-leave", "--doctor", "Alice", "--date", "2025-10-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 leave date(s) added"));

    cli(data)
        .args([
            "generate",
            "--start",
            "2025-10-07",
            "--until",
            "2025-10-09",
            "--override",
            "2025-10-08=24h",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("1 day(s) scheduled, 1 skipped"))
        .stderr(predicate::str::contains(
            "Not enough available doctors on 2025-10-07",
        ));

    cli(data)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-10-08 | Weekday |"))
        .stdout(predicate::str::contains("| 24-hour"));

    cli(data).arg("clear-leave").assert().success();
    cli(data)
        .args(["generate", "--start", "2025-10-07", "--until", "2025-10-08"])
        .assert()
        .success();
}

#[test]
fn generate_fails_with_a_single_doctor() {
    let dir = tempdir().unwrap();
    cli(dir.path())
        .args(["set-doctors", "--names", "Alice"])
        .assert()
        .success();
    cli(dir.path())
        .args(["generate", "--start", "2025-10-07"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not enough doctors"));
}

#[test]
fn invalid_inputs_are_rejected() {
    let dir = tempdir().unwrap();
    cli(dir.path())
        .args(["generate", "--start", "07/10/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
    cli(dir.path())
        .args(["generate", "--start", "2025-10-07", "--months", "0"])
        .assert()
        .failure();
    cli(dir.path())
        .args(["generate", "--start", "2025-10-07", "--duty", "36h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duty type: 36h"));
}
