//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

const SWIMMING_LINE: &str = "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
                             Mean speed: 1.000 km/h; Calories burned: 336.000.";
const RUNNING_LINE: &str = "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
                            Mean speed: 9.750 km/h; Calories burned: 699.750.";
const WALKING_LINE: &str = "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
                            Mean speed: 5.850 km/h; Calories burned: 157.500.";

fn fitcalc() -> Command {
    let mut cmd = Command::cargo_bin("fitcalc").expect("binary not found");
    cmd.env_remove("FITCALC_WORKOUTS");
    cmd
}

#[test]
fn help_flag() {
    fitcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--workout"));
}

#[test]
fn version_flag() {
    fitcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fitcalc"));
}

#[test]
fn demo_packages_in_order() {
    let expected = format!("{SWIMMING_LINE}\n{RUNNING_LINE}\n{WALKING_LINE}\n");
    fitcalc().assert().success().stdout(expected);
}

#[test]
fn single_workout() {
    fitcalc()
        .args(["-w", "RUN:15000,1,75"])
        .assert()
        .success()
        .stdout(format!("{RUNNING_LINE}\n"));
}

#[test]
fn workouts_from_env() {
    fitcalc()
        .env("FITCALC_WORKOUTS", "WLK:9000,1,75,180;SWM:720,1,80,25,40")
        .assert()
        .success()
        .stdout(format!("{WALKING_LINE}\n{SWIMMING_LINE}\n"));
}

#[test]
fn unknown_kind_skipped_and_reported() {
    fitcalc()
        .args(["-w", "BIKE:1,1,1", "-w", "RUN:15000,1,75"])
        .assert()
        .code(3)
        .stdout(format!("{RUNNING_LINE}\n"))
        .stderr(predicate::str::contains("Error: BIKE: unknown workout kind: BIKE"));
}

#[test]
fn arity_mismatch_is_invalid_input() {
    fitcalc()
        .args(["-w", "SWM:720,1,80,25"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn fail_fast_stops_batch() {
    fitcalc()
        .args(["--fail-fast", "-w", "RUN:15000,1", "-w", "RUN:15000,1,75"])
        .assert()
        .code(2)
        .stdout("");
}

#[test]
fn quiet_hides_errors() {
    fitcalc()
        .args(["-q", "-w", "run:15000,1,75"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn json_output() {
    let output = fitcalc()
        .args(["--json", "-w", "SWM:720,1,80,25,40"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["kind"], "Swimming");
    assert_eq!(value["calories"], 336.0);
}

#[test]
fn list_kinds() {
    fitcalc()
        .arg("--list-kinds")
        .assert()
        .success()
        .stdout("RUN\nWLK\nSWM\n");
}

#[test]
fn malformed_flag_value() {
    fitcalc().args(["-w", "RUN"]).assert().failure();
}

#[test]
fn completion_bash() {
    fitcalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fitcalc"));
}
