use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn srcmerge() -> Command {
    Command::cargo_bin("srcmerge").expect("binary exists")
}

#[test]
fn help_displays_usage() {
    srcmerge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn merges_with_single_dash_flags() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::write(dir.path().join("a/b.py"), "print(1)").unwrap();
    fs::write(dir.path().join("c.txt"), "ignored").unwrap();
    let output = out_dir.path().join("out.txt");
    srcmerge()
        .arg("-d")
        .arg(dir.path())
        .args(["-suffix", "py", "-encoding", "UTF-8", "-o"])
        .arg(&output)
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "a/b.py:\n```python\nprint(1)\n```\n"
    );
}

#[test]
fn default_output_path() {
    let dir = tempdir().unwrap();
    let work = tempdir().unwrap();
    fs::write(dir.path().join("x.rs"), "fn x() {}\n").unwrap();
    srcmerge()
        .current_dir(work.path())
        .arg("-d")
        .arg(dir.path())
        .args(["--suffix", "rs"])
        .assert()
        .success();
    let merged = fs::read_to_string(work.path().join("merged_source_code.txt")).unwrap();
    assert_eq!(merged, "x.rs:\n```rust\nfn x() {}\n```\n");
}

#[test]
fn missing_suffix_is_usage_error() {
    let dir = tempdir().unwrap();
    let work = tempdir().unwrap();
    srcmerge()
        .current_dir(work.path())
        .arg("-d")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--suffix"));
    assert!(!work.path().join("merged_source_code.txt").exists());
}

#[test]
fn missing_flag_value_is_usage_error() {
    srcmerge()
        .args(["-suffix", "py", "-d"])
        .assert()
        .failure();
}

#[test]
fn missing_root_fails_without_output() {
    let work = tempdir().unwrap();
    srcmerge()
        .current_dir(work.path())
        .args(["-d", "no-such-dir", "-suffix", "py"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
    assert!(!work.path().join("merged_source_code.txt").exists());
}

#[test]
fn summary_is_json() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "y").unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();
    let assert = srcmerge()
        .arg("-d")
        .arg(dir.path())
        .args(["-suffix", "txt", "--summary", "-o"])
        .arg(out_dir.path().join("out.txt"))
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["files"], serde_json::json!(["a.txt", "b.txt"]));
}
