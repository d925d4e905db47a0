use std::io::Cursor;
use std::path::Path;

use checkverify::cmd::verify::{VerifyCommandArgs, run_with_stdin};
use checkverify::io::{Format, IoError, resolve_input_format, resolve_rules_format};
use serde_json::json;
use tempfile::tempdir;

fn stdin_args(rules: &Path) -> VerifyCommandArgs {
    VerifyCommandArgs {
        rules: rules.to_path_buf(),
        rules_format: None,
        input: None,
        input_format: None,
        parse_dates: false,
    }
}

#[test]
fn explicit_format_beats_the_extension() {
    let input =
        resolve_input_format(Some(Format::Yaml), Some(Path::new("vars.json"))).expect("input");
    let rules =
        resolve_rules_format(Some(Format::Toml), Some(Path::new("checks.yaml"))).expect("rules");
    assert_eq!(input, Format::Yaml);
    assert_eq!(rules, Format::Toml);
}

#[test]
fn extensions_resolve_case_insensitively() {
    for (path, expected) in [
        ("vars.yml", Format::Yaml),
        ("vars.YAML", Format::Yaml),
        ("checks.TOML", Format::Toml),
        ("checks.Toml", Format::Toml),
        ("vars.Json", Format::Json),
    ] {
        let resolved = resolve_input_format(None, Some(Path::new(path))).expect(path);
        assert_eq!(resolved, expected, "{path}");
    }
}

#[test]
fn unsupported_rules_extension_names_the_rules_file() {
    let err = resolve_rules_format(None, Some(Path::new("checks.csv"))).expect_err("csv");
    match err {
        IoError::UnsupportedPathExtension { kind, path } => {
            assert_eq!(kind, "rules");
            assert_eq!(path, "checks.csv");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn input_without_path_or_format_is_unresolved() {
    let err = resolve_input_format(None, None).expect_err("nothing to resolve from");
    assert!(matches!(err, IoError::UnresolvedFormat { kind: "input" }));
}

#[test]
fn stdin_input_defaults_to_json() {
    let dir = tempdir().expect("tempdir");
    let rules_path = dir.path().join("checks.YML");
    std::fs::write(&rules_path, "checks:\n  - field: NAME\n    tests: [string]\n")
        .expect("write rules");

    let response = run_with_stdin(&stdin_args(&rules_path), Cursor::new(r#"{"NAME": "svc"}"#));
    assert_eq!(response.exit_code, 0);
    assert_eq!(response.payload, json!({"matched": true, "check_count": 1}));

    let response = run_with_stdin(&stdin_args(&rules_path), Cursor::new("NAME: svc\n"));
    assert_eq!(response.exit_code, 3);
}

#[test]
fn explicit_input_format_applies_to_stdin() {
    let dir = tempdir().expect("tempdir");
    let rules_path = dir.path().join("checks.json");
    std::fs::write(
        &rules_path,
        r#"{"checks": [{"field": "NAME", "tests": ["string"]}]}"#,
    )
    .expect("write rules");

    let mut args = stdin_args(&rules_path);
    args.input_format = Some(Format::Yaml);
    let response = run_with_stdin(&args, Cursor::new("NAME: svc\n"));
    assert_eq!(response.exit_code, 0);
}
