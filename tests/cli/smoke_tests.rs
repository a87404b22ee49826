// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::BIN;

#[test]
fn shows_help() {
    Command::new(BIN)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("num_words"));
}

#[test]
fn shows_version() {
    Command::new(BIN)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn spells_single_number() {
    Command::new(BIN)
        .arg("2")
        .assert()
        .success()
        .stdout("2 - два\n");
}

#[test]
fn spells_negative_number() {
    Command::new(BIN)
        .arg("-1000")
        .assert()
        .success()
        .stdout("-1000 - минус одна тысяча\n");
}

#[test]
fn no_arguments_prints_usage() {
    Command::new(BIN)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("print number converted to words"))
        .stdout(predicate::str::contains("<number>"))
        .stderr(predicate::str::contains("should have one int64 parameter"));
}

#[test]
fn two_arguments_print_usage() {
    Command::new(BIN)
        .args(["2", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("usage:"))
        .stderr(predicate::str::contains("got 2"));
}

#[test]
fn non_integer_reports_error_without_usage() {
    Command::new(BIN)
        .arg("invalid")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("number should be int64"));
}

#[test]
fn out_of_range_integer_is_rejected() {
    Command::new(BIN)
        .arg("9223372036854775808")
        .assert()
        .failure()
        .stderr(predicate::str::contains("number should be int64"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    Command::new(BIN)
        .args(["-v", "21000"])
        .assert()
        .success()
        .stdout("21000 - двадцать одна тысяча\n")
        .stderr(predicate::str::contains("spelling number"));
}
