//! Integration tests for the Infinity CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::cargo_bin("infinity-cli").unwrap()
}

#[test]
fn test_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("toc"))
        .stdout(predicate::str::contains("chapter"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn test_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("infinity"));
}

#[test]
fn test_info() {
    cli()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Infinity Loop"))
        .stdout(predicate::str::contains("Chapters:     11"))
        .stdout(predicate::str::contains("Entries:      25"));
}

#[test]
fn test_info_json() {
    let output = cli().args(["info", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["frontMatter"], 8);
    assert_eq!(json["chapters"], 11);
    assert_eq!(json["backMatter"], 6);
}

#[test]
fn test_toc_lists_badges() {
    cli()
        .arg("toc")
        .assert()
        .success()
        .stdout(predicate::str::contains("Front Matter"))
        .stdout(predicate::str::contains("Back Matter"))
        .stdout(predicate::str::contains("(1865 - 1877) LoopSnapshot"));
}

#[test]
fn test_toc_json() {
    let output = cli().args(["toc", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = json.as_array().unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[1]["children"].as_array().unwrap().len(), 11);
    assert_eq!(groups[2]["children"][0]["href"], "#app-a");
}

#[test]
fn test_chapter() {
    cli()
        .args(["chapter", "ch5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number:   5"))
        .stdout(predicate::str::contains("Previous: ch4"))
        .stdout(predicate::str::contains("Next:     ch6"))
        .stdout(predicate::str::contains("Loading content for CHAPTER 5"));
}

#[test]
fn test_chapter_json() {
    let output = cli().args(["chapter", "about", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["section"], "back");
    assert_eq!(json["chapterNumber"], 0);
    assert_eq!(json["label"], "About the Author");
}

#[test]
fn test_chapter_not_found() {
    cli()
        .args(["chapter", "ch12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Chapter not found: ch12"));
}

#[test]
fn test_chapter_missing_id() {
    cli()
        .arg("chapter")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_validate() {
    cli()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog is valid"))
        .stdout(predicate::str::contains("Numbered chapters: 11"));
}

#[test]
fn test_export_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("book.json");

    cli()
        .args(["export", "--output", output.to_str().unwrap()])
        .assert()
        .success();

    let contents = fs::read_to_string(&output).unwrap();
    let book: infinity_core::Book = serde_json::from_str(&contents).unwrap();
    assert_eq!(book.title, "The Infinity Loop");
    assert!(book.validate().is_ok());
}

#[test]
fn test_export_to_stdout() {
    cli()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"frontMatter\""))
        .stdout(predicate::str::contains("\"chapterNumber\": 11"));
}

#[test]
fn test_export_unwritable_path() {
    cli()
        .args(["export", "--output", "/nonexistent/dir/book.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write output file"));
}

#[test]
fn test_config() {
    cli()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("INF-"))
        .stdout(predicate::str::contains("INF-TEST-2024"));
}

#[test]
fn test_convert_rewrites_manuscript_as_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("TITLE_PAGE.htm");
    fs::write(
        &input,
        b"<meta http-equiv=Content-Type content=\"text/html; charset=Windows-1252\">\n<p>\x93The Loop\x94</p>",
    )
    .unwrap();

    cli()
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("to UTF-8"));

    let converted = fs::read_to_string(&input).unwrap();
    assert!(converted.contains("charset=utf-8"));
    assert!(converted.contains("\u{201C}The Loop\u{201D}"));
}

#[test]
fn test_convert_skips_missing_files() {
    let temp_dir = TempDir::new().unwrap();
    let present = temp_dir.path().join("CHAPTER_2.htm");
    let missing = temp_dir.path().join("CHAPTER_3.htm");
    fs::write(&present, "<meta charset=unicode>").unwrap();

    cli()
        .args([
            "convert",
            missing.to_str().unwrap(),
            present.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("SKIP:"))
        .stdout(predicate::str::contains("not found"));

    assert_eq!(fs::read_to_string(&present).unwrap(), "<meta charset=utf-8>");
}

#[test]
fn test_convert_fails_on_undecodable_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("CHAPTER_1.htm");
    fs::write(&input, b"<p>\x90</p>").unwrap();

    cli()
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to convert"))
        .stderr(predicate::str::contains("undefined in Windows-1252"));

    assert_eq!(fs::read(&input).unwrap(), b"<p>\x90</p>");
}

#[test]
fn test_convert_requires_files() {
    cli()
        .arg("convert")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
