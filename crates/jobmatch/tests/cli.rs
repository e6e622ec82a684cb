//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Writes a small dataset fixture and returns its directory and path.
fn dataset_fixture() -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ads.csv");
    fs::write(
        &path,
        "description,occupation,SSYK_code\n\
         senior backend developer role,Backend Developer,2512\n\
         backend developer and data analyst,Backend Developer,2512\n\
         frontend developer role,Frontend Developer,2513\n\
         ward nurse position,Nurse,2223\n",
    )
    .unwrap();
    let path = path.to_str().unwrap().to_string();
    (tmp, path)
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Search Command
// =============================================================================

#[test]
fn search_ranks_occupations_by_count() {
    let (_tmp, dataset) = dataset_fixture();
    cmd()
        .args(["search", "developer", "--dataset", &dataset, "--no-definitions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backend Developer"))
        .stdout(predicate::str::contains("(2 matches)"))
        .stdout(predicate::str::contains("Frontend Developer"))
        .stdout(predicate::str::contains("Showing results 1 to 2 of 2."));
}

#[test]
fn search_json_reports_counts_in_order() {
    let (_tmp, dataset) = dataset_fixture();
    let output = cmd()
        .args([
            "search",
            "developer",
            "--dataset",
            &dataset,
            "--no-definitions",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["title"], "Backend Developer");
    assert_eq!(results[0]["count"], 2);
    assert_eq!(results[1]["title"], "Frontend Developer");
    assert_eq!(results[1]["count"], 1);
    assert!(
        results[0]["listings_url"]
            .as_str()
            .unwrap()
            .contains("arbetsformedlingen.se/platsbanken/annonser?q=Backend+Developer")
    );
    // Offline run still fills a non-empty definition (the fallback text).
    assert_eq!(results[0]["definition"], "Ingen beskrivning tillgänglig");
}

#[test]
fn search_requires_whole_words() {
    let (_tmp, dataset) = dataset_fixture();
    cmd()
        .args(["search", "dev", "--dataset", &dataset, "--no-definitions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No occupations match"));
}

#[test]
fn search_combines_multiple_terms() {
    let (_tmp, dataset) = dataset_fixture();
    let output = cmd()
        .args([
            "search",
            "developer, nurse",
            "--dataset",
            &dataset,
            "--no-definitions",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 3);
    assert_eq!(report["results"][0]["title"], "Backend Developer");
}

#[test]
fn search_paginates_results() {
    let (_tmp, dataset) = dataset_fixture();
    cmd()
        .args([
            "search",
            "developer, nurse",
            "--dataset",
            &dataset,
            "--no-definitions",
            "--page-size",
            "2",
            "--page",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing results 3 to 3 of 3."))
        .stdout(predicate::str::contains("Page 2 of 2."));
}

#[test]
fn empty_terms_yield_empty_result_without_error() {
    let (_tmp, dataset) = dataset_fixture();
    cmd()
        .args(["search", ",,", "--dataset", &dataset, "--no-definitions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No occupations match"));
}

#[test]
fn missing_dataset_is_a_data_error_not_empty_results() {
    cmd()
        .args([
            "search",
            "developer",
            "--dataset",
            "/nonexistent/ads.csv",
            "--no-definitions",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dataset unavailable"));
}

#[test]
fn empty_dataset_is_a_data_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.csv");
    fs::write(&path, "description,occupation,SSYK_code\n").unwrap();

    cmd()
        .args([
            "search",
            "developer",
            "--dataset",
            path.to_str().unwrap(),
            "--no-definitions",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dataset unavailable"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_includes_config() {
    let output = cmd().args(["info", "--json"]).output().unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["name"], env!("CARGO_PKG_NAME"));
    assert!(info["config"]["page_size"].is_number());
}

#[test]
fn explicit_config_file_changes_page_size() {
    let (tmp, dataset) = dataset_fixture();
    let config_path = tmp.path().join("jobmatch.toml");
    fs::write(&config_path, "page_size = 1\n").unwrap();

    cmd()
        .args([
            "search",
            "developer",
            "--dataset",
            &dataset,
            "--no-definitions",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing results 1 to 1 of 2."));
}
