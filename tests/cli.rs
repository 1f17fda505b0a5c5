//! End-to-end CLI tests
//!
//! Each test runs the real binary against an isolated data directory via the
//! HORIZON_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn horizon(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("horizon").unwrap();
    cmd.env("HORIZON_DATA_DIR", data_dir.path());
    cmd
}

/// Create a planner and seed the scenario used by most tests:
/// salary 5000 monthly from 2024-01, rent 1500 due day 5 from 2024-01
fn seed_household(data_dir: &TempDir) {
    horizon(data_dir)
        .args(["planner", "create", "Household"])
        .assert()
        .success();
    horizon(data_dir)
        .args([
            "income", "add", "Salary", "5000", "--kind", "fixed", "--start", "2024-01",
        ])
        .assert()
        .success();
    horizon(data_dir)
        .args([
            "expense", "add", "Rent", "1500", "--day", "5", "--category", "rent", "--start",
            "2024-01",
        ])
        .assert()
        .success();
}

#[test]
fn init_creates_data_directory() {
    let data_dir = TempDir::new().unwrap();

    horizon(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("data").join("planners.json").exists());
}

#[test]
fn first_planner_becomes_default() {
    let data_dir = TempDir::new().unwrap();

    horizon(&data_dir)
        .args(["planner", "create", "Household"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Household"));

    horizon(&data_dir)
        .args(["planner", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* Household"));
}

#[test]
fn dashboard_shows_monthly_totals() {
    let data_dir = TempDir::new().unwrap();
    seed_household(&data_dir);

    horizon(&data_dir)
        .args(["dashboard", "--date", "2024-06-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5000.00"))
        .stdout(predicate::str::contains("$1500.00"))
        .stdout(predicate::str::contains("$3500.00"));
}

#[test]
fn dashboard_flags_commitment_breach() {
    let data_dir = TempDir::new().unwrap();

    horizon(&data_dir)
        .args(["planner", "create", "Tight", "--threshold", "0.5"])
        .assert()
        .success();
    horizon(&data_dir)
        .args(["income", "add", "Salary", "4000", "--start", "2024-01"])
        .assert()
        .success();
    horizon(&data_dir)
        .args([
            "expense", "add", "Everything", "2200", "--day", "25", "--start", "2024-01",
        ])
        .assert()
        .success();

    horizon(&data_dir)
        .args(["dashboard", "--date", "2024-06-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("55.0%"))
        .stdout(predicate::str::contains("OVER LIMIT"));
}

#[test]
fn alerts_list_bill_due_tomorrow_twice() {
    let data_dir = TempDir::new().unwrap();
    seed_household(&data_dir);

    horizon(&data_dir)
        .args(["card", "add", "Nubank"])
        .assert()
        .success();
    horizon(&data_dir)
        .args(["bill", "add", "Nubank", "800", "--due", "2024-06-11"])
        .assert()
        .success();

    horizon(&data_dir)
        .args(["alerts", "--date", "2024-06-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Due tomorrow"))
        .stdout(predicate::str::contains("Nubank - Card").count(2));
}

#[test]
fn paid_bill_stops_alerting() {
    let data_dir = TempDir::new().unwrap();
    seed_household(&data_dir);

    horizon(&data_dir)
        .args(["card", "add", "Nubank"])
        .assert()
        .success();
    horizon(&data_dir)
        .args(["bill", "add", "Nubank", "800", "--due", "2024-06-11"])
        .assert()
        .success();

    let list = horizon(&data_dir)
        .args(["bill", "list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(list.stdout).unwrap();
    let bill_id = stdout
        .lines()
        .find_map(|l| l.split_whitespace().next().filter(|w| w.starts_with("bill-")))
        .expect("bill id in listing");

    horizon(&data_dir)
        .args(["bill", "pay", bill_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("paid"));

    horizon(&data_dir)
        .args(["alerts", "--date", "2024-06-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nubank").not());
}

#[test]
fn income_list_and_delete_round_trip() {
    let data_dir = TempDir::new().unwrap();
    seed_household(&data_dir);

    let list = horizon(&data_dir)
        .args(["income", "list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(list.stdout).unwrap();
    assert!(stdout.contains("Salary"));
    let income_id = stdout
        .lines()
        .find_map(|l| l.split_whitespace().next().filter(|w| w.starts_with("inc-")))
        .expect("income id in listing");

    horizon(&data_dir)
        .args(["income", "delete", income_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));

    horizon(&data_dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No incomes"));
}

#[test]
fn invalid_expense_day_is_rejected() {
    let data_dir = TempDir::new().unwrap();
    seed_household(&data_dir);

    horizon(&data_dir)
        .args(["expense", "add", "Broken", "100", "--day", "32"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Due day"));
}

#[test]
fn unknown_category_is_rejected() {
    let data_dir = TempDir::new().unwrap();
    seed_household(&data_dir);

    horizon(&data_dir)
        .args([
            "expense", "add", "Groceries", "400", "--day", "10", "--category", "groceries",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown expense category"));
}

#[test]
fn command_without_planner_fails_cleanly() {
    let data_dir = TempDir::new().unwrap();

    horizon(&data_dir)
        .args(["income", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No planner selected"));
}

#[test]
fn savings_movements_shift_projected_balance() {
    let data_dir = TempDir::new().unwrap();
    seed_household(&data_dir);

    horizon(&data_dir)
        .args([
            "savings", "add", "Emergency fund", "500", "--kind", "deposit", "--date", "2024-05-01",
        ])
        .assert()
        .success();

    horizon(&data_dir)
        .args(["savings", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emergency fund"))
        .stdout(predicate::str::contains("$500.00"));

    // 5 past months netting 3500 plus the deposit
    horizon(&data_dir)
        .args(["dashboard", "--date", "2024-06-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$18000.00"));
}
