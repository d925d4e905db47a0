use checkverify::{CheckVerifyError, TestKind, Variable, expect};
use serde_json::json;

#[test]
fn reads_like_a_sentence() {
    let mut name = expect("SERVICE_NAME").expect("name");
    name.is().a().string();
    let mut params = expect("SERVICE_PARAMS").expect("params");
    params.to().be().an().object().or().an().array();

    let variables = Variable::from(json!({"SERVICE_NAME": "api", "SERVICE_PARAMS": [1, 2, 3]}));
    name.verify(&variables).expect("name");
    params.verify(&variables).expect("params");

    let explained = params.explain();
    assert_eq!(explained.len(), 1);
    assert_eq!(explained[0].tests, vec![TestKind::Object, TestKind::Array]);
    assert!(explained[0].or_mode);
    assert!(explained[0].required);
}

#[test]
fn or_group_failure_names_every_alternative() {
    let mut when = expect("WHEN").expect("when");
    when.is().a().date().or().a().number().or().a().string();

    let error = when
        .verify(&Variable::from(json!({"WHEN": false})))
        .expect_err("no alternative matches");
    assert_eq!(
        error,
        CheckVerifyError::Validation(
            "The test suite expected \"WHEN\" to be a date OR \"WHEN\" to be a number OR \"WHEN\" to be a populated string"
                .to_string()
        )
    );
}

#[test]
fn error_values_count_as_objects() {
    let mut thrown = expect("THROWN").expect("thrown");
    thrown.is().an().object();
    thrown
        .verify(&Variable::object().with("THROWN", Variable::error("Failed")))
        .expect("errors are objects");
}
