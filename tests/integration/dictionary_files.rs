// tests/integration/dictionary_files.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{BIN, TempDir};

#[test]
fn json_dictionary_overrides_builtin() {
    let dir = TempDir::new("num_words_json");
    let path = dir.write_file(
        "en.json",
        r#"{
            "digits": {"0": "", "1": "one", "2": "two", "20": "twenty"},
            "periods": [["thousand", "thousands", "thousands"]]
        }"#,
    );

    Command::new(BIN)
        .arg("--dictionary")
        .arg(&path)
        .arg("21002")
        .assert()
        .success()
        .stdout("21002 - twenty one thousand two\n");
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_dictionary_overrides_periods_only() {
    let dir = TempDir::new("num_words_yaml");
    let path = dir.write_file("periods.yaml", "periods:\n  - [тыс., тыс., тыс.]\n");

    Command::new(BIN)
        .arg("--dictionary")
        .arg(&path)
        .arg("5000")
        .assert()
        .success()
        .stdout("5000 - пять тыс.\n");
}

#[test]
fn missing_digit_word_fails_without_output() {
    let dir = TempDir::new("num_words_missing");
    let path = dir.write_file("digits.json", r#"{"digits": {"1": "one"}}"#);

    Command::new(BIN)
        .arg("--dictionary")
        .arg(&path)
        .arg("2")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("2: missing in numbers dictionary"));
}

#[test]
fn number_beyond_period_dictionary_fails() {
    let dir = TempDir::new("num_words_periods");
    let path = dir.write_file("periods.json", r#"{"periods": [["k", "k", "k"]]}"#);

    Command::new(BIN)
        .arg("--dictionary")
        .arg(&path)
        .arg("1000000")
        .assert()
        .failure()
        .stderr(predicate::str::contains("period level 1: missing in number period dictionary"));
}

#[test]
fn malformed_dictionary_is_rejected() {
    let dir = TempDir::new("num_words_malformed");
    let path = dir.write_file("bad.json", r#"{"periods": [["k"]]}"#);

    Command::new(BIN)
        .arg("--dictionary")
        .arg(&path)
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 3"));
}
