#![deny(clippy::all, clippy::pedantic)]

use assert_cmd::Command;
use predicates::str::contains;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn markdown_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".md")
        .tempfile()
        .expect("tmp file");
    file.write_all(contents.as_bytes()).expect("write markdown");
    file
}

fn scorcio() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("scorcio"))
}

fn staged_path(stdout: &[u8]) -> String {
    let output = String::from_utf8_lossy(stdout);
    let mut lines = output.lines();
    let path = lines.next().expect("one line of output").to_string();
    assert_eq!(lines.next(), None, "stdout must carry exactly one line");
    path
}

#[test]
fn missing_file_flag_prints_usage() {
    scorcio()
        .assert()
        .failure()
        .stderr(contains("--file"));
}

#[test]
fn unreadable_input_fails_fast() {
    scorcio()
        .arg("--file")
        .arg("/nonexistent/input.md")
        .assert()
        .failure()
        .stderr(contains("failed to read input"));
}

#[test]
fn skip_preview_stages_and_reports_the_file() {
    let input = markdown_file("# Hello\n");

    let assert = scorcio()
        .arg("--file")
        .arg(input.path())
        .arg("-s")
        .assert()
        .success();

    let path = staged_path(&assert.get_output().stdout);
    assert!(path.ends_with(".html"));
    assert!(Path::new(&path).is_absolute());

    let staged = std::fs::read_to_string(&path).expect("staged file survives -s");
    assert!(staged.contains("<h1>Hello</h1>"));
    assert!(staged.contains("<!DOCTYPE html>"));

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn staged_document_is_sanitized() {
    let input = markdown_file("hello\n\n<script>alert(1)</script>\n");

    let assert = scorcio()
        .arg("--file")
        .arg(input.path())
        .arg("-s")
        .assert()
        .success();

    let path = staged_path(&assert.get_output().stdout);
    let staged = std::fs::read_to_string(&path).expect("staged file survives -s");
    assert!(!staged.contains("<script"));

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn alternate_template_is_used() {
    let input = markdown_file("body text\n");
    let dir = tempfile::tempdir().expect("tmp dir");
    let template = dir.path().join("minimal.html");
    std::fs::write(&template, "<section>{{ body | safe }}</section>").expect("write template");

    let assert = scorcio()
        .arg("--file")
        .arg(input.path())
        .arg("-t")
        .arg(&template)
        .arg("-s")
        .assert()
        .success();

    let path = staged_path(&assert.get_output().stdout);
    let staged = std::fs::read_to_string(&path).expect("staged file survives -s");
    assert!(staged.starts_with("<section>"));
    assert!(staged.contains("<p>body text</p>"));

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn broken_template_aborts_without_staging() {
    let input = markdown_file("# Hello\n");
    let dir = tempfile::tempdir().expect("tmp dir");
    let template = dir.path().join("broken.html");
    std::fs::write(&template, "{{ body").expect("write template");

    let assert = scorcio()
        .arg("--file")
        .arg(input.path())
        .arg("-t")
        .arg(&template)
        .assert()
        .failure()
        .stderr(contains("template"));

    assert!(assert.get_output().stdout.is_empty(), "no path on failure");
}

#[test]
fn invalid_log_level_is_a_configuration_error() {
    let input = markdown_file("# Hello\n");

    scorcio()
        .arg("--file")
        .arg(input.path())
        .arg("--log-level")
        .arg("chatty")
        .assert()
        .failure()
        .stderr(contains("configuration"));
}
