use checkverify::{CheckVerify, CheckVerifyError, Variable};
use serde_json::json;

fn vars(value: serde_json::Value) -> Variable {
    Variable::from(value)
}

#[test]
fn every_field_name_without_tests_passes() {
    for field in ["A", "SERVICE_NAME", "service.name", "items[0]", "ünïcode"] {
        let mut engine = CheckVerify::suite();
        engine.check(field).expect("valid field");
        engine.verify(&vars(json!({}))).expect("nothing to fail");
    }
}

#[test]
fn required_checks_fail_when_absent_for_every_type() {
    let registrations: [fn(&mut CheckVerify) -> Result<&mut CheckVerify, CheckVerifyError>; 9] = [
        CheckVerify::string,
        CheckVerify::number,
        CheckVerify::boolean,
        CheckVerify::object,
        CheckVerify::array,
        CheckVerify::function,
        CheckVerify::error,
        CheckVerify::date,
        CheckVerify::url,
    ];

    for register in registrations {
        let mut required = CheckVerify::suite();
        required.check("FIELD").and_then(register).expect("register");
        let error = required.verify(&vars(json!({}))).expect_err("absent required");
        assert!(error.is_validation());

        let mut optional = CheckVerify::suite();
        optional.optional("FIELD").and_then(register).expect("register");
        optional.verify(&vars(json!({}))).expect("absent optional");
    }
}

#[test]
fn end_to_end_scenarios() {
    let mut name = CheckVerify::suite();
    name.check("NAME").and_then(CheckVerify::string).expect("register");
    name.verify(&vars(json!({"NAME": "ok"}))).expect("ok");
    assert_eq!(
        name.verify(&vars(json!({"NAME": 5}))).expect_err("number").to_string(),
        "The test suite expected \"NAME\" to be a populated string"
    );

    let mut count = CheckVerify::suite();
    count.check("COUNT").and_then(CheckVerify::number).expect("register");
    assert!(count.verify(&vars(json!({}))).is_err());

    let mut optional = CheckVerify::suite();
    optional.optional("COUNT").and_then(CheckVerify::number).expect("register");
    optional.verify(&vars(json!({}))).expect("absent");
    assert_eq!(
        optional
            .verify(&vars(json!({"COUNT": "x"})))
            .expect_err("string")
            .to_string(),
        "The test suite expected \"COUNT\" to be a number"
    );
}

#[test]
fn mixed_variable_kinds_verify_together() {
    let source = vars(json!({"NAME": "svc", "ENDPOINT": "https://svc.internal/api"}))
        .with("HANDLER", Variable::function("handler", |args| args.first().cloned().into()))
        .with("FAILURE", Variable::error("timeout"));

    let mut engine = CheckVerify::suite();
    engine.check("NAME").and_then(CheckVerify::string).expect("name");
    engine.check("ENDPOINT").and_then(CheckVerify::url).expect("endpoint");
    engine.check("HANDLER").and_then(CheckVerify::function).expect("handler");
    engine.check("FAILURE").and_then(CheckVerify::error).expect("failure");
    engine.optional("RETRIES").and_then(CheckVerify::number).expect("retries");

    engine.verify(&source).expect("all shapes match");
    assert_eq!(engine.explain().len(), 5);
}
