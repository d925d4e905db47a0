use std::fs;

use predicates::prelude::predicate;
use serde_json::{Value, json};
use tempfile::tempdir;

#[test]
fn explain_prints_declared_checks() {
    let dir = tempdir().expect("tempdir");
    let rules = dir.path().join("rules.toml");
    fs::write(
        &rules,
        r#"[[checks]]
field = "SERVICE_NAME"
tests = ["string"]

[[checks]]
field = "SERVICE_PARAMS"
tests = ["object", "array"]
or_mode = true
"#,
    )
    .expect("write rules");

    let output = assert_cmd::cargo::cargo_bin_cmd!("checkverify")
        .args(["explain", "--rules"])
        .arg(&rules)
        .output()
        .expect("run explain");

    assert_eq!(output.status.code(), Some(0));
    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    assert_eq!(
        payload,
        json!({
            "mode": "suite",
            "checks": [
                {"field": "SERVICE_NAME", "tests": ["string"], "required": true, "or_mode": false},
                {"field": "SERVICE_PARAMS", "tests": ["object", "array"], "required": true, "or_mode": true}
            ]
        })
    );
}

#[test]
fn explain_rejects_unknown_test_names() {
    let dir = tempdir().expect("tempdir");
    let rules = dir.path().join("rules.json");
    fs::write(&rules, r#"{"checks": [{"field": "A", "tests": ["integer"]}]}"#)
        .expect("write rules");

    assert_cmd::cargo::cargo_bin_cmd!("checkverify")
        .args(["explain", "--rules"])
        .arg(&rules)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid rules file"));
}

#[test]
fn explain_honours_explicit_rules_format() {
    let dir = tempdir().expect("tempdir");
    let rules = dir.path().join("rules.txt");
    fs::write(&rules, "checks:\n  - field: A\n").expect("write rules");

    assert_cmd::cargo::cargo_bin_cmd!("checkverify")
        .args(["explain", "--rules-format", "yaml", "--rules"])
        .arg(&rules)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(r#""field":"A""#));
}
