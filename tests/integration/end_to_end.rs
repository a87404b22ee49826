// tests/integration/end_to_end.rs
use assert_cmd::Command;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::BIN;

fn spell(arg: &str) -> String {
    let output = Command::new(BIN).arg(arg).output().unwrap();
    assert!(output.status.success(), "{arg}: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn three_group_number() {
    assert_eq!(
        spell("123456789"),
        "123456789 - сто двадцать три миллиона четыреста пятьдесят шесть тысяч семьсот восемьдесят девять\n"
    );
}

#[test]
fn gender_agreement_in_thousands() {
    assert_eq!(spell("1000"), "1000 - одна тысяча\n");
    assert_eq!(spell("2000"), "2000 - две тысячи\n");
    assert_eq!(spell("11000"), "11000 - одиннадцать тысяч\n");
}

#[test]
fn millions_stay_masculine() {
    assert_eq!(spell("1000000"), "1000000 - один миллион\n");
    assert_eq!(spell("2000000"), "2000000 - два миллиона\n");
}

#[test]
fn zero() {
    assert_eq!(spell("0"), "0 - нуль\n");
}

#[test]
fn extreme_values() {
    assert!(spell("9223372036854775807").starts_with("9223372036854775807 - девять квинтиллионов"));
    assert!(spell("-9223372036854775808").starts_with("-9223372036854775808 - минус девять квинтиллионов"));
}

#[test]
fn json_format() {
    let output = Command::new(BIN).args(["--format", "json", "-42"]).output().unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["input"], "-42");
    assert_eq!(value["value"], -42);
    assert_eq!(value["words"], "минус сорок два");
}
