//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help_lists_commands() {
    let mut cmd = Command::cargo_bin("marathon").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("marathon").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--cors-origin"))
        .stdout(predicate::str::contains("--skip-migrations"))
        .stdout(predicate::str::contains("127.0.0.1:8000"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("marathon").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("marathon").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_port_setting_fails_fast() {
    let mut cmd = Command::cargo_bin("marathon").unwrap();
    cmd.arg("migrate")
        .env_remove("DATABASE_URL")
        .env("DB_PORT", "not-a-port");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid database settings"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("marathon").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("marathon"));
}
