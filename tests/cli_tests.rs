use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "budget-tracker";

fn tracker_command(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BUDGET_TRACKER_DATA_DIR", data_dir);
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn cli_without_command_prints_overview() {
    let temp_dir = TempDir::new().unwrap();
    tracker_command(temp_dir.path())
        .assert()
        .success()
        .stdout(contains("--help"));
}

#[test]
fn cli_init_then_list_shows_default_profile() {
    let temp_dir = TempDir::new().unwrap();

    tracker_command(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Default Profile"));

    tracker_command(temp_dir.path())
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(contains("Default Profile").and(contains("$5,000.00")));

    assert!(temp_dir.path().join("data").join("config.json").exists());
}

#[test]
fn cli_budget_show_lists_allocated_rows() {
    let temp_dir = TempDir::new().unwrap();

    tracker_command(temp_dir.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(contains("Rent").and(contains("$962.50")));
}

#[test]
fn cli_set_cost_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    tracker_command(temp_dir.path())
        .args(["budget", "set-cost", "0", "1234.56"])
        .assert()
        .success()
        .stdout(contains("Rent"));

    tracker_command(temp_dir.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(contains("$1,234.56"));
}

#[test]
fn cli_set_cost_rejects_letters() {
    let temp_dir = TempDir::new().unwrap();

    tracker_command(temp_dir.path())
        .args(["budget", "set-cost", "0", "12abc"])
        .assert()
        .failure();

    tracker_command(temp_dir.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(contains("$962.50"));
}

#[test]
fn cli_create_and_use_profile() {
    let temp_dir = TempDir::new().unwrap();

    tracker_command(temp_dir.path())
        .args(["profile", "create", "Side Gig", "--income", "2500"])
        .assert()
        .success()
        .stdout(contains("Created profile: Side Gig"));

    tracker_command(temp_dir.path())
        .args(["profile", "use", "side gig"])
        .assert()
        .success();

    tracker_command(temp_dir.path())
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(contains("Profile: Side Gig").and(contains("$2,500.00")));
}

#[test]
fn cli_export_csv_writes_header() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("budget.csv");

    tracker_command(temp_dir.path())
        .args(["budget", "export"])
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("Name,Cost per Month,Percent"));
}

#[test]
fn cli_import_rejects_wrong_header() {
    let temp_dir = TempDir::new().unwrap();
    let sheet = temp_dir.path().join("legacy.csv");
    fs::write(&sheet, "Wrong,Columns,Here\nIncome,Monthly Income,2000\n").unwrap();

    tracker_command(temp_dir.path())
        .args(["budget", "import"])
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(contains("Expected columns"));
}

#[test]
fn cli_default_income_applies_to_first_profile() {
    let temp_dir = TempDir::new().unwrap();

    tracker_command(temp_dir.path())
        .args(["config", "--default-income", "3000"])
        .assert()
        .success()
        .stdout(contains("Default profile: (none)"));

    tracker_command(temp_dir.path())
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(contains("Default Profile").and(contains("$3,000.00")));
}
