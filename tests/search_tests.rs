//! Integration tests for search and filters

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{add_lead, leadmap_cmd};

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    leadmap_cmd().arg("init").arg(temp.path()).assert().success();

    add_lead(temp.path(), "Café Central", &["--priority", "5"]);
    add_lead(
        temp.path(),
        "Bar Norte",
        &[
            "--business-type",
            "bar",
            "--neighborhood",
            "Bairro Alto",
            "--website-url",
            "https://barnorte.pt",
            "--potential",
            "high",
            "--priority",
            "3",
        ],
    );
    add_lead(
        temp.path(),
        "Padaria Sul",
        &["--business-type", "bakery", "--neighborhood", "Alfama"],
    );

    temp
}

#[test]
fn test_search_by_name_substring() {
    let temp = setup();

    leadmap_cmd()
        .current_dir(temp.path())
        .args(["search", "--name", "central"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 lead(s) found"))
        .stdout(predicate::str::contains("Café Central"))
        .stdout(predicate::str::contains("Bar Norte").not());
}

#[test]
fn test_search_by_neighborhood() {
    let temp = setup();

    leadmap_cmd()
        .current_dir(temp.path())
        .args(["search", "--neighborhood", "alto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bar Norte"))
        .stdout(predicate::str::contains("Café Central").not());
}

#[test]
fn test_search_by_business_type() {
    let temp = setup();

    leadmap_cmd()
        .current_dir(temp.path())
        .args(["search", "--business-type", "bakery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Padaria Sul"));
}

#[test]
fn test_filter_without_website_includes_cafe_central() {
    let temp = setup();

    leadmap_cmd()
        .current_dir(temp.path())
        .args(["search", "--no-website"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 lead(s) found"))
        .stdout(predicate::str::contains("Café Central"))
        .stdout(predicate::str::contains("Padaria Sul"))
        .stdout(predicate::str::contains("Bar Norte").not());
}

#[test]
fn test_filter_by_potential() {
    let temp = setup();

    leadmap_cmd()
        .current_dir(temp.path())
        .args(["search", "--potential", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 lead(s) found"))
        .stdout(predicate::str::contains("Bar Norte"));
}

#[test]
fn test_filter_min_priority_sorted_descending() {
    let temp = setup();

    let output = leadmap_cmd()
        .current_dir(temp.path())
        .args(["search", "--min-priority", "3"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let central = stdout.find("Café Central").unwrap();
    let norte = stdout.find("Bar Norte").unwrap();
    assert!(central < norte, "priority 5 should come before priority 3");
    assert!(!stdout.contains("Padaria Sul"));
}

#[test]
fn test_bare_min_priority_uses_configured_threshold() {
    let temp = setup();

    // Default threshold is 3: Café Central (5) and Bar Norte (3) qualify
    leadmap_cmd()
        .current_dir(temp.path())
        .args(["search", "--min-priority"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 lead(s) found"));

    // Raise the threshold; a bare --min-priority now excludes Bar Norte
    leadmap_cmd()
        .current_dir(temp.path())
        .args(["config", "min_priority", "4"])
        .assert()
        .success();

    leadmap_cmd()
        .current_dir(temp.path())
        .args(["search", "--min-priority"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 lead(s) found"))
        .stdout(predicate::str::contains("Café Central"))
        .stdout(predicate::str::contains("Bar Norte").not());

    // An explicit value still wins over the configured threshold
    leadmap_cmd()
        .current_dir(temp.path())
        .args(["search", "--min-priority", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 lead(s) found"));
}

#[test]
fn test_search_without_filters_lists_all_without_count() {
    let temp = setup();

    leadmap_cmd()
        .current_dir(temp.path())
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("lead(s) found").not())
        .stdout(predicate::str::contains("Café Central"))
        .stdout(predicate::str::contains("Bar Norte"))
        .stdout(predicate::str::contains("Padaria Sul"));
}

#[test]
fn test_filters_combine() {
    let temp = setup();

    leadmap_cmd()
        .current_dir(temp.path())
        .args(["search", "--no-website", "--min-priority", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 lead(s) found"))
        .stdout(predicate::str::contains("Café Central"));
}

#[test]
fn test_search_empty_store() {
    let temp = TempDir::new().unwrap();
    leadmap_cmd().arg("init").arg(temp.path()).assert().success();

    leadmap_cmd()
        .current_dir(temp.path())
        .args(["search", "--name", "anything"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 lead(s) found"))
        .stdout(predicate::str::contains("No leads found"));
}

#[test]
fn test_search_invalid_potential_fails() {
    let temp = setup();

    leadmap_cmd()
        .current_dir(temp.path())
        .args(["search", "--potential", "huge"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid potential level"));
}
