//! End-to-end runs of the `validate-rewrites` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write config");
    path
}

fn run(args: &[&PathBuf]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_validate-rewrites"))
        .arg("--color")
        .arg("never")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run validate-rewrites")
}

#[test]
fn all_files_passing_exits_zero() {
    let dir = tempfile::tempdir().expect("temp dir");
    let a = write_config(dir.path(), "a.conf", "RewriteRule ^/a /x [L]\n");
    let b = write_config(dir.path(), "b.conf", "# no rules\n");

    let output = run(&[&a, &b]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains(&format!("{}: OK", a.display())));
    assert!(stdout.contains(&format!("{}: OK", b.display())));
}

#[test]
fn any_failure_exits_one_and_other_files_still_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let bad = write_config(
        dir.path(),
        "bad.conf",
        "RewriteEngine On\nRewriteRule ^/shop /store [L]\nRewriteRule ^/shop/cart /basket\n",
    );
    let missing = dir.path().join("missing.conf");
    let good = write_config(dir.path(), "good.conf", "RewriteRule ^/a /x [L]\n");

    let output = run(&[&bad, &missing, &good]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Redirect 2:^/shop overrides 3:^/shop/cart"));
    assert!(stdout.contains(&format!("{}: OK", good.display())));
    assert!(stderr.contains(&format!("Failed rules: 1 in {}", bad.display())));
    assert!(stderr.contains("file not found"));
}

#[test]
fn json_format_reports_outcomes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let bad = write_config(dir.path(), "bad.conf", "RewriteRule /a /x [L]\nRewriteRule /ab /y\n");

    let output = Command::new(env!("CARGO_BIN_EXE_validate-rewrites"))
        .args(["--format", "json"])
        .arg(&bad)
        .env_remove("RUST_LOG")
        .output()
        .expect("run validate-rewrites");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(value[0]["status"], "collisions");
    assert_eq!(value[0]["rule_count"], 2);
    assert_eq!(value[0]["reports"][0]["overridden"]["source"], "/a");
}

#[test]
fn missing_arguments_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_validate-rewrites"))
        .output()
        .expect("run validate-rewrites");
    assert_eq!(output.status.code(), Some(2));
}
