//! Integration tests for the `folio` CLI.
//!
//! Each test creates a temp directory, runs `folio` as a subprocess,
//! and verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `folio` binary.
fn folio_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("folio");
    path
}

/// Run `folio` with the given args in the given directory, returning
/// (stdout, stderr, success).
fn run_folio(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(folio_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run folio");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Write a small content file with two projects.
fn write_test_content(root: &Path) {
    fs::write(
        root.join("portfolio.toml"),
        r#"[meta]
site_title = "Test Portfolio"

[profile]
name = "Test Person"
title = "Engineer"
bio = ["First paragraph."]

[profile.links]
email = "test@example.com"

[[skills]]
group = "Languages"
items = ["Rust", "TypeScript"]

[[projects]]
id = "alpha"
title = "Alpha Service"
description = "A realtime sync service."
tags = ["Rust", "WebSockets"]
role = "Lead"

[[projects]]
id = "beta"
title = "Beta Tool"
description = "A build pipeline helper."
tags = ["Docker"]
"#,
    )
    .unwrap();
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_starter_content() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, ok) = run_folio(tmp.path(), &["init"]);
    assert!(ok);
    assert!(stdout.contains("portfolio.toml"));

    let written = fs::read_to_string(tmp.path().join("portfolio.toml")).unwrap();
    assert!(written.contains("Alex Morgan"));
}

#[test]
fn init_refuses_overwrite_without_force() {
    let tmp = TempDir::new().unwrap();
    write_test_content(tmp.path());

    let (_, stderr, ok) = run_folio(tmp.path(), &["init"]);
    assert!(!ok);
    assert!(stderr.contains("--force"));

    // Original content untouched
    let text = fs::read_to_string(tmp.path().join("portfolio.toml")).unwrap();
    assert!(text.contains("Alpha Service"));

    let (_, _, ok) = run_folio(tmp.path(), &["init", "--force"]);
    assert!(ok);
    let text = fs::read_to_string(tmp.path().join("portfolio.toml")).unwrap();
    assert!(text.contains("Alex Morgan"));
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

#[test]
fn projects_lists_everything_by_default() {
    let tmp = TempDir::new().unwrap();
    write_test_content(tmp.path());

    let (stdout, _, ok) = run_folio(tmp.path(), &["projects"]);
    assert!(ok);
    assert!(stdout.contains("Alpha Service"));
    assert!(stdout.contains("Beta Tool"));
}

#[test]
fn projects_query_is_case_insensitive() {
    let tmp = TempDir::new().unwrap();
    write_test_content(tmp.path());

    let (stdout, _, ok) = run_folio(tmp.path(), &["projects", "--query", "REALTIME"]);
    assert!(ok);
    assert!(stdout.contains("Alpha Service"));
    assert!(!stdout.contains("Beta Tool"));
}

#[test]
fn projects_tag_filter_is_exact() {
    let tmp = TempDir::new().unwrap();
    write_test_content(tmp.path());

    let (stdout, _, ok) = run_folio(tmp.path(), &["projects", "--tag", "Docker"]);
    assert!(ok);
    assert!(stdout.contains("Beta Tool"));
    assert!(!stdout.contains("Alpha Service"));

    // Tag comparison is case-sensitive, so a lowercase tag misses.
    let (stdout, _, ok) = run_folio(tmp.path(), &["projects", "--tag", "docker"]);
    assert!(ok);
    assert!(stdout.contains("no matches"));
}

#[test]
fn projects_json_reports_count_and_tag() {
    let tmp = TempDir::new().unwrap();
    write_test_content(tmp.path());

    let (stdout, _, ok) = run_folio(tmp.path(), &["projects", "--tag", "Docker", "--json"]);
    assert!(ok);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["tag"], "Docker");
    assert_eq!(parsed["count"], 1);
    assert_eq!(parsed["projects"][0]["id"], "beta");
}

#[test]
fn projects_falls_back_to_embedded_content() {
    let tmp = TempDir::new().unwrap();
    // No portfolio.toml anywhere beneath a fresh temp dir
    let (stdout, _, ok) = run_folio(tmp.path(), &["projects"]);
    assert!(ok);
    assert!(stdout.contains("Pulse Analytics Dashboard"));
}

#[test]
fn starter_content_query_narrows_to_one_project() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, ok) = run_folio(tmp.path(), &["projects", "--query", "websocket", "--json"]);
    assert!(ok);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["count"], 1);
    assert_eq!(parsed["projects"][0]["id"], "pulse-analytics");
}

#[test]
fn explicit_content_path_overrides_discovery() {
    let tmp = TempDir::new().unwrap();
    let sub = tmp.path().join("elsewhere");
    fs::create_dir_all(&sub).unwrap();
    write_test_content(&sub);

    let content = sub.join("portfolio.toml");
    let (stdout, _, ok) = run_folio(
        tmp.path(),
        &["projects", "--content", content.to_str().unwrap()],
    );
    assert!(ok);
    assert!(stdout.contains("Alpha Service"));
}

// ---------------------------------------------------------------------------
// tags / skills / profile
// ---------------------------------------------------------------------------

#[test]
fn tags_lists_universe_with_all_first() {
    let tmp = TempDir::new().unwrap();
    write_test_content(tmp.path());

    let (stdout, _, ok) = run_folio(tmp.path(), &["tags"]);
    assert!(ok);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["All", "Docker", "Rust", "WebSockets"]);
}

#[test]
fn skills_lists_groups_and_items() {
    let tmp = TempDir::new().unwrap();
    write_test_content(tmp.path());

    let (stdout, _, ok) = run_folio(tmp.path(), &["skills"]);
    assert!(ok);
    assert!(stdout.contains("Languages:"));
    assert!(stdout.contains("  Rust"));
}

#[test]
fn profile_shows_name_and_links() {
    let tmp = TempDir::new().unwrap();
    write_test_content(tmp.path());

    let (stdout, _, ok) = run_folio(tmp.path(), &["profile"]);
    assert!(ok);
    assert!(stdout.contains("Test Person"));
    assert!(stdout.contains("test@example.com"));
}

#[test]
fn profile_json_round_trips_fields() {
    let tmp = TempDir::new().unwrap();
    write_test_content(tmp.path());

    let (stdout, _, ok) = run_folio(tmp.path(), &["profile", "--json"]);
    assert!(ok);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["profile"]["name"], "Test Person");
    assert_eq!(parsed["profile"]["links"]["email"], "test@example.com");
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_on_clean_content() {
    let tmp = TempDir::new().unwrap();
    write_test_content(tmp.path());

    let (stdout, _, ok) = run_folio(tmp.path(), &["check"]);
    assert!(ok);
    assert!(stdout.contains("content ok"));
}

#[test]
fn check_fails_on_duplicate_project_id() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("portfolio.toml"),
        r#"[profile]
name = "Test"

[[projects]]
id = "same"
title = "One"
tags = ["a"]

[[projects]]
id = "same"
title = "Two"
tags = ["b"]
"#,
    )
    .unwrap();

    let (stdout, _, ok) = run_folio(tmp.path(), &["check"]);
    assert!(!ok);
    assert!(stdout.contains("duplicate project id 'same'"));
}

#[test]
fn check_json_carries_structured_findings() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("portfolio.toml"),
        r#"[profile]
name = "Test"

[[projects]]
id = "solo"
title = "Solo"
"#,
    )
    .unwrap();

    let (stdout, _, ok) = run_folio(tmp.path(), &["check", "--json"]);
    assert!(ok); // warnings only
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["valid"], true);
    assert_eq!(parsed["warnings"][0]["type"], "untagged_project");
    assert_eq!(parsed["warnings"][0]["project_id"], "solo");
}

#[test]
fn malformed_content_reports_parse_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("portfolio.toml"), "not = [ toml").unwrap();

    let (_, stderr, ok) = run_folio(tmp.path(), &["check"]);
    assert!(!ok);
    assert!(stderr.contains("could not parse"));
}
