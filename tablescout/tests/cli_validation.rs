//! Exit-code behavior for input validation.
//!
//! Every rejection here must happen before any credential fetch or
//! connection attempt, so these tests run without a warehouse.

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("tablescout").unwrap()
}

#[test]
fn sample_rejects_zero_limit() {
    cmd()
        .args(["sample", "public", "users", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn sample_rejects_negative_limit() {
    cmd()
        .args(["sample", "public", "users", "-5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn sample_rejects_non_integer_limit() {
    cmd()
        .args(["sample", "public", "users", "twenty"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must be an integer"));
}

#[test]
fn schema_rejects_injection_in_table_name() {
    cmd()
        .args(["schema", "public", "users'; DROP TABLE users;--"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid character"));
}

#[test]
fn schema_rejects_empty_schema_name() {
    cmd()
        .args(["schema", "", "users"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn distinct_rejects_path_traversal() {
    cmd()
        .args(["distinct", "../etc", "passwd", "shadow"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must start with a letter"));
}

#[test]
fn stats_rejects_quoted_column() {
    cmd()
        .args(["stats", "public", "users", "name\" OR \"1\"=\"1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid character"));
}

#[test]
fn query_rejects_unsafe_table_even_with_trusted_fragment() {
    cmd()
        .args(["query", "public", "users; --", "WHERE 1=1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid character"));
}

#[test]
fn migrate_rejects_missing_file() {
    cmd()
        .args(["migrate", "/nonexistent/migrations/001_init.sql"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn ddl_rejects_missing_file() {
    cmd()
        .args(["ddl", "/nonexistent/views/summary.sql"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}
