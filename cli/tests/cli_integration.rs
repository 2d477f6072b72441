use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn codedump() -> Command {
    Command::cargo_bin("codedump").unwrap()
}

#[test]
fn missing_root_argument_is_a_usage_error() {
    codedump()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn output_flag_without_a_value_is_a_usage_error() {
    let dir = tempdir().unwrap();
    codedump().arg(dir.path()).arg("-o").assert().failure();
}

#[test]
fn nonexistent_root_fails_with_a_diagnostic() {
    codedump()
        .arg("definitely/not/a/real/dir")
        .arg("-o")
        .arg("unused.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid scan root"));
}

#[test]
fn summary_is_written_to_the_output_file() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("main.rs"), "fn main() {}").unwrap();
    fs::create_dir(root.join("build")).unwrap();
    fs::write(root.join("build/out.txt"), "artifact").unwrap();
    fs::write(root.join(".dumpignore"), "build/\n").unwrap();

    let out_path = dir.path().join("summary.txt");
    codedump()
        .arg(&root)
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary written to"));

    let summary = fs::read_to_string(&out_path).unwrap();
    assert!(summary.contains("File: main.rs"));
    assert!(summary.contains("fn main() {}"));
    assert!(!summary.contains("out.txt"));
}

#[test]
fn quiet_mode_suppresses_the_confirmation() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("lib.rs"), "pub fn x() {}").unwrap();

    let out_path = dir.path().join("summary.txt");
    codedump()
        .arg(&root)
        .arg("-o")
        .arg(&out_path)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(out_path.exists());
}

#[test]
fn output_parent_directories_are_created() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();

    let out_path = dir.path().join("deep/nested/summary.txt");
    codedump()
        .arg(&root)
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success();

    assert!(out_path.exists());
}

#[test]
fn scan_of_an_empty_directory_produces_an_empty_artifact() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("empty");
    fs::create_dir(&root).unwrap();

    let out_path = dir.path().join("summary.txt");
    codedump()
        .arg(&root)
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out_path).unwrap(), "");
}
