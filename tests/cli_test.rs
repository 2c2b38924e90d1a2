mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_cli_import_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let log = dir.path().join("orders.csv");

    let mut cmd = Command::new(cargo_bin!("cake-orders"));
    cmd.arg("--orders-log")
        .arg(&log)
        .arg("import")
        .arg("tests/fixtures/submissions.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Jane,12\" Round · 2 layer(s),2024-03-08,23.80",
        ))
        .stdout(predicate::str::contains("Ana,24×24\" Square,2024-02-04,40.80"))
        .stderr(predicate::str::contains(
            "Rejected submission 2: Name is required.",
        ))
        .stderr(predicate::str::contains(
            "Invalid number of layers for round cake.",
        ));

    let rows = common::read_rows(&log);
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "timestamp");
    assert_eq!(&rows[1][1], "Jane");
    assert_eq!(&rows[2][1], "Ana");
    assert_eq!(&rows[2][11], "1");

    Ok(())
}

#[test]
fn test_cli_import_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("submissions.csv");
    common::generate_submissions(&input, 2)?;

    let output = Command::new(cargo_bin!("cake-orders"))
        .arg("--orders-log")
        .arg(dir.path().join("orders.csv"))
        .arg("import")
        .arg(&input)
        .arg("--json")
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let receipts: Vec<serde_json::Value> = stdout
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(receipts.len(), 2);
    assert_eq!(receipts[0]["customer"], "customer-1");
    assert_eq!(receipts[0]["cake_type"], "9-round");
    assert_eq!(receipts[0]["layers"], 1);
    assert_eq!(receipts[0]["base_price"], "12.00");
    assert_eq!(receipts[0]["total_price"], "10.20");
    assert_eq!(receipts[1]["delivery_date"], "2024-03-08");

    Ok(())
}

#[test]
fn test_cli_import_unwritable_log_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::new(cargo_bin!("cake-orders"));
    cmd.arg("--orders-log")
        .arg(dir.path().join("missing").join("orders.csv"))
        .arg("import")
        .arg("tests/fixtures/submissions.csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to persist order"));
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::new(cargo_bin!("cake-orders"));
    cmd.arg("--orders-log")
        .arg(dir.path().join("orders.csv"))
        .arg("import")
        .arg(dir.path().join("nope.csv"));

    cmd.assert().failure();
    assert!(!dir.path().join("orders.csv").exists());
}
