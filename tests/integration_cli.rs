//! Integration tests for bearthday CLI commands
//!
//! Everything here runs offline; the cache commands are pointed at a
//! temporary directory via XDG_CACHE_HOME so they never touch the real
//! user cache. Network-dependent flows are covered by `#[ignore]`d tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the bearthday binary
fn bearthday() -> Command {
    Command::cargo_bin("bearthday").unwrap()
}

#[test]
fn test_help() {
    bearthday()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bearthday"))
        .stdout(predicate::str::contains("lookup"))
        .stdout(predicate::str::contains("dates"))
        .stdout(predicate::str::contains("browse"));
}

#[test]
fn test_version() {
    bearthday()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_lookup_rejects_malformed_birthdate_before_network() {
    // Month-first input is the most likely mistake; it must fail fast
    // with the expected format, not with a network error
    bearthday()
        .arg("lookup")
        .arg("12-18-1960")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"))
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_lookup_rejects_impossible_month() {
    bearthday()
        .arg("lookup")
        .arg("1960-13-01")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_lookup_requires_birthdate() {
    bearthday()
        .arg("lookup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("BIRTHDATE"));
}

#[test]
fn test_browse_rejects_malformed_birthdate() {
    bearthday()
        .arg("browse")
        .arg("not-a-date")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_unknown_subcommand_suggests_lookup() {
    bearthday()
        .arg("find")
        .arg("1960-12-18")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bearthday lookup"));
}

#[test]
fn test_cache_path_points_into_cache_dir() {
    let temp = TempDir::new().unwrap();

    bearthday()
        .env("XDG_CACHE_HOME", temp.path())
        .args(["cache", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bearthday"))
        .stdout(predicate::str::contains("dates.json"));
}

#[test]
fn test_cache_info_without_cache() {
    let temp = TempDir::new().unwrap();

    bearthday()
        .env("XDG_CACHE_HOME", temp.path())
        .args(["cache", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cached dates feed"));
}

#[test]
fn test_cache_info_json_without_cache() {
    let temp = TempDir::new().unwrap();

    bearthday()
        .env("XDG_CACHE_HOME", temp.path())
        .args(["cache", "info", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"exists\": false"));
}

#[test]
fn test_cache_clean_without_cache() {
    let temp = TempDir::new().unwrap();

    bearthday()
        .env("XDG_CACHE_HOME", temp.path())
        .args(["cache", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to remove"));
}

#[test]
fn test_cache_clean_removes_existing_file() {
    let temp = TempDir::new().unwrap();
    let cache_dir = temp.path().join("bearthday");
    fs::create_dir_all(&cache_dir).unwrap();
    fs::write(
        cache_dir.join("dates.json"),
        r#"{"fetched_at_unix":0,"dates":["2021-01-19"]}"#,
    )
    .unwrap();

    bearthday()
        .env("XDG_CACHE_HOME", temp.path())
        .args(["cache", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed cached dates feed"));

    assert!(!cache_dir.join("dates.json").exists());
}

#[test]
fn test_cache_info_reads_seeded_cache() {
    let temp = TempDir::new().unwrap();
    let cache_dir = temp.path().join("bearthday");
    fs::create_dir_all(&cache_dir).unwrap();
    // fetched_at_unix of 0 makes the entry ancient and therefore stale
    fs::write(
        cache_dir.join("dates.json"),
        r#"{"fetched_at_unix":0,"dates":["2021-01-19","2020-12-18"]}"#,
    )
    .unwrap();

    bearthday()
        .env("XDG_CACHE_HOME", temp.path())
        .args(["cache", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 dates"))
        .stdout(predicate::str::contains("stale"));
}

// Integration tests that require network

#[test]
#[ignore]
fn test_lookup_json_integration() {
    let temp = TempDir::new().unwrap();

    bearthday()
        .env("XDG_CACHE_HOME", temp.path())
        .args(["lookup", "1969-07-20", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"success\""))
        .stdout(predicate::str::contains("epic.gsfc.nasa.gov/archive"));
}

#[test]
#[ignore]
fn test_dates_limit_integration() {
    let temp = TempDir::new().unwrap();

    bearthday()
        .env("XDG_CACHE_HOME", temp.path())
        .args(["dates", "--limit", "3", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"date_count\": 3"));
}
