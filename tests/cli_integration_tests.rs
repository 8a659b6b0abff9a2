//! CLI Integration Tests
//!
//! Tests the `xlsv` binary directly using assert_cmd to exercise main.rs
//! code paths.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_fixture_xlsx(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Data").unwrap();
    worksheet.write_string(0, 0, "header").unwrap();
    worksheet.write_string(1, 0, "value").unwrap();
    workbook.save(path).unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("xlsv"))
        .stdout(predicate::str::contains("EXAMPLES"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xlsv"));
}

#[test]
fn test_info_help() {
    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List"));
}

#[test]
fn test_batch_help() {
    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.args(["batch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folder"));
}

// ═══════════════════════════════════════════════════════════════════════════
// CONVERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_convert_missing_file_exits_nonzero() {
    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.arg("nonexistent.xlsx")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_convert_unsupported_extension_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("wrong.docx");
    fs::write(&input, "data").unwrap();

    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported file extension"));
}

#[test]
fn test_convert_excel_to_csv_succeeds() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("book.xlsx");
    write_fixture_xlsx(&input);

    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully converted"));
    assert!(temp.path().join("book.csv").exists());
}

#[test]
fn test_convert_csv_to_excel_succeeds() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("data.csv");
    fs::write(&input, "a,b\n1,2\n").unwrap();

    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rows"));
    assert!(temp.path().join("data.xlsx").exists());
}

#[test]
fn test_convert_explicit_output_path() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("data.csv");
    let output = temp.path().join("renamed.xlsx");
    fs::write(&input, "a,b\n").unwrap();

    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.arg(&input).arg(&output).assert().success();
    assert!(output.exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// INFO AND BATCH TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_info_lists_sheet_names() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("book.xlsx");
    write_fixture_xlsx(&input);

    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.args(["info", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data"))
        .stdout(predicate::str::contains("2 rows"));
}

#[test]
fn test_info_missing_file_exits_nonzero() {
    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.args(["info", "nonexistent.xlsx"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_batch_folder_conversion() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("one.csv"), "a,b\n1,2\n").unwrap();

    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.args(["batch", temp.path().to_str().unwrap(), "to-excel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Batch complete"));
    assert!(temp.path().join("one.xlsx").exists());
}

#[test]
fn test_no_arguments_shows_usage() {
    let mut cmd = Command::cargo_bin("xlsv").unwrap();
    cmd.assert().failure().code(2);
}
