//! E2E tests for the doclinks CLI

#![allow(deprecated)] // cargo_bin deprecation - will update when assert_cmd stabilizes replacement

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn doclinks() -> Command {
    let mut cmd = Command::cargo_bin("doclinks").unwrap();
    cmd.env_remove("DOCLINKS_ROOT")
        .env_remove("DOCLINKS_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read_report(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_help() {
    doclinks()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--relative-to"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_version() {
    doclinks()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("doclinks"));
}

#[test]
fn test_broken_link_with_suggestion() {
    let dir = tempdir().unwrap();
    write(dir.path(), "guide/intro.mdx", "# Intro\n");
    write(dir.path(), "guide/other.mdx", "# Other\n\n[bad](/guide/intor)\n");

    doclinks()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Link validation complete!"))
        .stdout(predicate::str::contains("Total links found: 1"))
        .stdout(predicate::str::contains("Broken internal links: 1"))
        .stdout(predicate::str::contains("External links: 0"));

    let report = read_report(&dir.path().join("link_validation_report.json"));
    assert_eq!(report["summary"]["total_files_scanned"], 2);
    assert_eq!(report["summary"]["broken_internal_links"], 1);

    let broken = &report["broken_links"][0];
    assert_eq!(broken["file"], "guide/other.mdx");
    assert_eq!(broken["line"], 3);
    assert_eq!(broken["type"], "markdown");
    assert_eq!(broken["raw_match"], "[bad](/guide/intor)");
    assert_eq!(broken["validation"]["valid"], false);
    assert_eq!(broken["validation"]["target"], "/guide/intor.mdx");
    assert!(broken["validation"]["suggestion"]
        .as_str()
        .unwrap()
        .contains("guide/intro"));
    assert_eq!(broken["confidence"], "high");
}

#[test]
fn test_external_src_is_not_validated() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "index.md",
        "<img src=\"https://example.com/pic.png\">\n",
    );
    let out = dir.path().join("report.json");

    doclinks()
        .arg(dir.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let report = read_report(&out);
    assert_eq!(report["summary"]["external_links"], 1);
    assert_eq!(report["summary"]["internal_links"], 0);
    assert_eq!(report["external_links"][0]["type"], "src");
    assert_eq!(report["broken_links"], serde_json::json!([]));
}

#[test]
fn test_empty_root() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("report.json");

    doclinks()
        .arg(dir.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total links found: 0"));

    let report = read_report(&out);
    assert_eq!(report["summary"]["total_files_scanned"], 0);
    assert_eq!(report["summary"]["fixes_applied"], 0);
    assert_eq!(report["all_links"], serde_json::json!([]));
    assert_eq!(report["fixes_applied"], serde_json::json!([]));
}

#[test]
fn test_relative_to_file() {
    let dir = tempdir().unwrap();
    write(dir.path(), "guide/intro.mdx", "# Intro\n");
    write(dir.path(), "guide/other.mdx", "[see intro](./intro)\n");
    let out = dir.path().join("report.json");

    doclinks()
        .arg(dir.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Broken internal links: 1"));

    doclinks()
        .arg(dir.path())
        .arg("-o")
        .arg(&out)
        .args(["--relative-to", "file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Broken internal links: 0"));
}

#[test]
fn test_report_is_reproducible() {
    let dir = tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(&docs, "a.mdx", "[b](/b)\n<a href=\"/missing\">x</a>\n");
    write(&docs, "b.md", "[a](./a) [ext](https://example.com)\n");
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    doclinks().arg(&docs).arg("-o").arg(&first).assert().success();
    doclinks().arg(&docs).arg("-o").arg(&second).assert().success();

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_stdout_yaml_output() {
    let dir = tempdir().unwrap();
    write(dir.path(), "index.mdx", "[missing](/zzz)\n");

    doclinks()
        .arg(dir.path())
        .args(["--output", "-", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("broken_internal_links: 1"))
        .stdout(predicate::str::contains("confidence: low"))
        .stderr(predicate::str::contains("Broken internal links: 1"));

    assert!(!dir.path().join("link_validation_report.json").exists());
}

#[test]
fn test_fail_on_broken() {
    let dir = tempdir().unwrap();
    write(dir.path(), "index.mdx", "[missing](/zzz)\n");

    doclinks()
        .arg(dir.path())
        .arg("--fail-on-broken")
        .assert()
        .failure()
        .code(1);

    // Report is still written before exiting
    assert!(dir.path().join("link_validation_report.json").exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempdir().unwrap();

    doclinks()
        .arg(dir.path())
        .arg("-o")
        .arg(dir.path().join("no/such/dir/report.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn test_invalid_relative_mode() {
    doclinks()
        .args(["--relative-to", "sideways", "."])
        .assert()
        .failure();
}
