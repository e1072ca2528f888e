//! Integration tests for the metasniff CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write an HTML fixture into `dir`
fn fixture(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn metasniff() -> Command {
    Command::cargo_bin("metasniff").unwrap()
}

#[test]
fn test_detect_bom_file() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "bom.html", b"\xEF\xBB\xBF<html>...</html>");

    metasniff()
        .arg("detect")
        .arg("-i")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("bom.html: utf-8 (bom)\n"));
}

#[test]
fn test_detect_meta_and_default() {
    let dir = TempDir::new().unwrap();
    fixture(&dir, "latin.html", br#"<!DOCTYPE html><meta charset="iso-8859-1">..."#);
    fixture(&dir, "plain.html", b"<html><body>plain</body></html>");

    metasniff()
        .arg("detect")
        .arg("-i")
        .arg(dir.path().join("*.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("latin.html: windows-1252 (meta)"))
        .stdout(predicate::str::contains("plain.html: windows-1252 (default)"));
}

#[test]
fn test_detect_stdin_streaming() {
    metasniff()
        .args(["detect", "-i", "-", "--stream", "--chunk-size", "1"])
        .write_stdin(r#"<meta http-equiv="content-type" content="text/html; charset=utf-8">"#)
        .assert()
        .success()
        .stdout("-: utf-8 (meta)\n");
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "sjis.html", br#"<meta charset="Shift_JIS">"#);

    let output = metasniff()
        .arg("detect")
        .arg("-i")
        .arg(&path)
        .args(["-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["encoding"], "shift_jis");
    assert_eq!(records[0]["source"], "meta");
    assert_eq!(records[0]["confidence"], "tentative");
    assert_eq!(records[0]["path"], path.display().to_string());
}

#[test]
fn test_declaration_past_limit() {
    let dir = TempDir::new().unwrap();
    let mut html = b"<html><head><title>".to_vec();
    html.resize(1100, b'x');
    html.extend_from_slice(br#"</title><meta charset="utf-8">"#);
    let path = fixture(&dir, "late.html", &html);

    metasniff()
        .arg("detect")
        .arg("-i")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("windows-1252 (default)"));

    metasniff()
        .arg("detect")
        .arg("-i")
        .arg(&path)
        .args(["--limit", "2048"])
        .assert()
        .success()
        .stdout(predicate::str::contains("utf-8 (meta)"));
}

#[test]
fn test_config_file_default_encoding() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "plain.html", b"<p>plain</p>");
    let config = dir.path().join("metasniff.toml");
    fs::write(&config, "[sniffing]\ndefault_encoding = \"utf-8\"\n").unwrap();

    metasniff()
        .arg("detect")
        .arg("-i")
        .arg(&path)
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("utf-8 (default)"));
}

#[test]
fn test_invalid_default_encoding() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "plain.html", b"<p>plain</p>");

    metasniff()
        .arg("detect")
        .arg("-i")
        .arg(&path)
        .args(["--default", "klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("klingon"));
}

#[test]
fn test_missing_input() {
    metasniff()
        .args(["detect", "-i", "/nonexistent/metasniff/*.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_labels_command() {
    metasniff()
        .args(["labels", "latin1", "sjis", "iso-2022-kr"])
        .assert()
        .success()
        .stdout("latin1: windows-1252\nsjis: shift_jis\niso-2022-kr: unsupported\n");
}

#[test]
fn test_generate_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("generated.toml");
    let path = fixture(&dir, "page.html", br#"<meta charset="gbk">"#);

    metasniff()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success();

    metasniff()
        .arg("detect")
        .arg("-i")
        .arg(&path)
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("gbk (meta)"));
}

#[test]
fn test_help_lists_commands() {
    metasniff()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("detect"))
        .stdout(predicate::str::contains("labels"));
}
