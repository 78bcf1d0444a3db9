//! Integration tests for CSV export

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{add_lead, leadmap_cmd};

#[test]
fn test_export_empty_store_warns_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    leadmap_cmd().arg("init").arg(temp.path()).assert().success();

    leadmap_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: no leads to export"));

    assert!(!temp.path().join("leads.csv").exists());
}

#[test]
fn test_export_writes_csv_with_header() {
    let temp = TempDir::new().unwrap();
    leadmap_cmd().arg("init").arg(temp.path()).assert().success();

    add_lead(
        temp.path(),
        "Café Central",
        &["--opportunity", "Website", "--opportunity", "Online menu"],
    );

    leadmap_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 leads"));

    let contents = fs::read_to_string(temp.path().join("leads.csv")).unwrap();
    let header = contents.lines().next().unwrap();
    assert!(header.starts_with("name,address,neighborhood,business_type"));
    assert!(contents.contains("Café Central"));
    assert!(contents.contains("Website; Online menu"));
}

#[test]
fn test_export_to_custom_path() {
    let temp = TempDir::new().unwrap();
    leadmap_cmd().arg("init").arg(temp.path()).assert().success();

    add_lead(temp.path(), "Café Central", &[]);

    let out = temp.path().join("out").join("scouting.csv");
    fs::create_dir_all(out.parent().unwrap()).unwrap();

    leadmap_cmd()
        .current_dir(temp.path())
        .args(["export", "--output", out.to_str().unwrap()])
        .assert()
        .success();

    assert!(out.exists());
}
