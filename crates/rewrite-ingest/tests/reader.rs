//! Tests for loading rules from disk.

use std::fs;

use rewrite_ingest::{IngestError, read_rules};

#[test]
fn reads_rules_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("site.conf");
    fs::write(
        &path,
        "<VirtualHost *:80>\nRewriteEngine On\nRewriteCond %{HTTP_HOST} ^www\nRewriteRule ^/docs /manual [L]\n    RewriteRule ^/x /y\nRewriteRule \"^/docs/old\" \"/manual/old\" [r=302]\n</VirtualHost>\n",
    )
    .expect("write config");

    let rules = read_rules(&path).expect("read rules");
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].index(), 4);
    assert_eq!(rules[0].source(), "^/docs");
    assert!(rules[0].flags().is_last());
    assert_eq!(rules[1].index(), 6);
    assert_eq!(rules[1].source(), "^/docs/old");
    assert_eq!(rules[1].destination(), "/manual/old");
    assert!(rules[1].flags().contains("R=302"));
}

#[test]
fn file_without_rules_is_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("empty.conf");
    fs::write(&path, "ServerName example.com\n").expect("write config");

    assert!(read_rules(&path).expect("read rules").is_empty());
}

#[test]
fn invalid_utf8_is_replaced() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("latin1.conf");
    fs::write(&path, b"# caf\xe9\nRewriteRule /a /b [L]\n").expect("write config");

    let rules = read_rules(&path).expect("read rules");
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].index(), 2);
}

#[test]
fn crlf_line_endings_keep_carriage_return_out_of_flags() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("windows.conf");
    fs::write(&path, "RewriteRule /a /b [L]\r\nRewriteRule /c /d\r\n").expect("write config");

    let rules = read_rules(&path).expect("read rules");
    assert!(rules[0].flags().is_last());
    assert_eq!(rules[1].destination(), "/d\r");
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.conf");

    let error = read_rules(&path).expect_err("missing file");
    assert!(matches!(error, IngestError::FileNotFound { .. }));
    assert_eq!(error.path(), &path);
    assert!(error.to_string().contains("missing.conf"));
}

#[test]
fn directory_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");

    let error = read_rules(dir.path()).expect_err("directory");
    assert!(matches!(error, IngestError::FileRead { .. }));
}
