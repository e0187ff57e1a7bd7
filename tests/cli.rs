//! End-to-end tests for the spendlog binary
//!
//! Each test points the binary at its own temp CSV file via SPENDLOG_FILE.

use assert_cmd::Command;
use chrono::{Datelike, Utc};
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_FILE", temp_dir.path().join("expenses.csv"));
    cmd
}

#[test]
fn no_command_prints_usage_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    spendlog(&temp_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn list_on_fresh_file_prints_header_only() {
    let temp_dir = TempDir::new().unwrap();
    spendlog(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout("|ID|Description|Amount|Created At|Updated At|\n");
}

#[test]
fn add_list_summary_round_trip() {
    let temp_dir = TempDir::new().unwrap();

    spendlog(&temp_dir)
        .args(["add", "--description", "Lunch", "--amount", "20"])
        .assert()
        .success();
    spendlog(&temp_dir)
        .args(["add", "--description", "Dinner", "--amount", "15"])
        .assert()
        .success();

    spendlog(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("|1  |Lunch     |20    |"))
        .stdout(predicate::str::contains("|2  |Dinner    |15    |"));

    spendlog(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: 35\n");
}

#[test]
fn update_changes_fields_and_keeps_id() {
    let temp_dir = TempDir::new().unwrap();

    spendlog(&temp_dir)
        .args(["add", "--description", "Lunch", "--amount", "20"])
        .assert()
        .success();
    spendlog(&temp_dir)
        .args([
            "update",
            "--id",
            "1",
            "--description",
            "Team lunch",
            "--amount",
            "35",
        ])
        .assert()
        .success();

    spendlog(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("|1  |Team lunch|35    |"));
}

#[test]
fn delete_unknown_id_fails_with_message() {
    let temp_dir = TempDir::new().unwrap();
    spendlog(&temp_dir)
        .args(["delete", "--id", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: 99"));
}

#[test]
fn negative_amount_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    spendlog(&temp_dir)
        .args(["add", "--description", "Refund", "--amount", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount cannot be negative"));

    spendlog(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: 0\n");
}

#[test]
fn empty_description_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    spendlog(&temp_dir)
        .args(["add", "--description", "", "--amount", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description and amount are required"));

    spendlog(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: 0\n");
}

#[test]
fn zero_amount_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    spendlog(&temp_dir)
        .args(["add", "--description", "Lunch", "--amount", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description and amount are required"));

    spendlog(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout("|ID|Description|Amount|Created At|Updated At|\n");
}

#[test]
fn update_with_negative_amount_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    spendlog(&temp_dir)
        .args(["add", "--description", "Lunch", "--amount", "20"])
        .assert()
        .success();

    spendlog(&temp_dir)
        .args([
            "update",
            "--id",
            "1",
            "--description",
            "Lunch",
            "--amount",
            "-1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount cannot be negative"));

    spendlog(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("|1  |Lunch     |20    |"));
}

#[test]
fn month_summary_scopes_to_current_month() {
    let temp_dir = TempDir::new().unwrap();

    spendlog(&temp_dir)
        .args(["add", "--description", "Lunch", "--amount", "20"])
        .assert()
        .success();

    let this_month = Utc::now().month();
    let other_month = if this_month == 1 { 2 } else { 1 };

    spendlog(&temp_dir)
        .args(["summary", "--month"])
        .arg(this_month.to_string())
        .assert()
        .success()
        .stdout("Total expenses: 20\n");

    spendlog(&temp_dir)
        .args(["summary", "--month"])
        .arg(other_month.to_string())
        .assert()
        .success()
        .stdout("Total expenses: 0\n");
}

#[test]
fn month_summary_zero_means_overall() {
    let temp_dir = TempDir::new().unwrap();

    spendlog(&temp_dir)
        .args(["add", "--description", "Lunch", "--amount", "20"])
        .assert()
        .success();

    spendlog(&temp_dir)
        .args(["summary", "--month", "0"])
        .assert()
        .success()
        .stdout("Total expenses: 20\n");
}

#[test]
fn month_summary_out_of_range_fails() {
    let temp_dir = TempDir::new().unwrap();
    spendlog(&temp_dir)
        .args(["summary", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month must be between 1 and 12"));
}

#[test]
fn delete_removes_exactly_one_entry() {
    let temp_dir = TempDir::new().unwrap();

    spendlog(&temp_dir)
        .args(["add", "--description", "Lunch", "--amount", "20"])
        .assert()
        .success();
    spendlog(&temp_dir)
        .args(["add", "--description", "Dinner", "--amount", "15"])
        .assert()
        .success();
    spendlog(&temp_dir)
        .args(["delete", "--id", "1"])
        .assert()
        .success();

    spendlog(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dinner"))
        .stdout(predicate::str::contains("Lunch").not());

    spendlog(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: 15\n");
}
