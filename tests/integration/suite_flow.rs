use checkverify::{CheckVerifyError, Suite, Variable};
use serde_json::json;

#[derive(Default)]
struct Recorder {
    tests: Vec<String>,
}

fn variables() -> Variable {
    Variable::from(json!({
        "SERVICE_NAME": "Name1",
        "SERVICE_PARAMS": [1, 2, 3]
    }))
    .with("THROWN_ERROR", Variable::error("Failed"))
}

fn declared_suite() -> Suite<Recorder> {
    let mut suite = Suite::new();
    suite.declare(|lab: &mut Recorder, variables| {
        let name = variables
            .as_object()
            .and_then(|map| map.get("SERVICE_NAME"))
            .and_then(Variable::as_str)
            .unwrap_or_default()
            .to_string();
        lab.tests.push(format!("{name} responds"));
    });
    suite
}

#[test]
fn suite_runs_body_once_expectations_hold() {
    let mut suite = declared_suite();
    suite.expect("SERVICE_NAME").expect("name").to().be().a().string();
    suite.expect("SERVICE_PARAMS").expect("params").to().be().an().array();
    suite.expect("THROWN_ERROR").expect("error").to().be().an().error();

    let mut lab = Recorder::default();
    suite.run(&mut lab, &variables()).expect("first run");
    suite.run(&mut lab, &variables()).expect("second run");
    assert_eq!(lab.tests, vec!["Name1 responds", "Name1 responds"]);
}

#[test]
fn suite_aborts_before_body_on_bad_variables() {
    let mut suite = declared_suite();
    suite.expect("SERVICE_NAME").expect("name").to().be().a().string();
    suite.expect("SERVICE_PARAMS").expect("params").to().be().an().object();

    let mut lab = Recorder::default();
    let error = suite.run(&mut lab, &variables()).expect_err("params is an array");
    assert!(error.is_validation());
    assert!(lab.tests.is_empty());

    let error = suite
        .run(&mut lab, &Variable::from("not variables"))
        .expect_err("not an object");
    assert_eq!(
        error,
        CheckVerifyError::Validation("the parameter \"variables\" is not an object".to_string())
    );
}
