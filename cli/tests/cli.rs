use assert_cmd::Command;
use predicates::prelude::*;

fn montecarlo() -> Command {
    Command::cargo_bin("montecarlo").expect("binary builds")
}

#[test]
fn seeded_run_prints_a_report() {
    montecarlo()
        .args(["--rolls", "20", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rolls: 20"))
        .stdout(predicate::str::contains("jackpots:"))
        .stdout(predicate::str::contains("face totals:"));
}

#[test]
fn forced_jackpots_are_reported_exactly() {
    // Only face 3 carries weight on every die, so all 5 rolls are jackpots.
    montecarlo()
        .args([
            "--faces", "1,2,3", "--rolls", "5", "--weight", "1=0", "--weight", "2=0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("jackpots: 5"));
}

#[test]
fn json_report_round_trips() {
    let assert = montecarlo()
        .args(["--rolls", "10", "--seed", "3", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["rolls"], 10);
    assert_eq!(report["dice"], 2);
}

#[test]
fn narrow_dump_lists_every_cell() {
    montecarlo()
        .args(["--rolls", "3", "--dice", "2", "--form", "narrow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("die 0"))
        .stdout(predicate::str::contains("die 1"));
}

#[test]
fn zero_rolls_fail() {
    montecarlo().args(["--rolls", "0"]).assert().failure();
}

#[test]
fn unknown_form_fails() {
    montecarlo()
        .args(["--rolls", "5", "--form", "tall"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tall"));
}

#[test]
fn unknown_weight_face_fails() {
    montecarlo()
        .args(["--rolls", "5", "--weight", "9=2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight override"));
}
