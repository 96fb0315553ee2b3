// CLI 冒煙測試

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_shortcuts() {
    Command::cargo_bin("tonepick")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tone"))
        .stdout(predicate::str::contains("Ctrl+Z"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("tonepick")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.2.0"));
}
