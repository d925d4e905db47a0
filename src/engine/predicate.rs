use url::Url;

use crate::domain::check::TestKind;
use crate::domain::value::Variable;

/// Runs one type test. `None` is an absent value and fails every test.
pub fn passes(kind: TestKind, value: Option<&Variable>) -> bool {
    let Some(value) = value else {
        return false;
    };

    match kind {
        TestKind::String => matches!(value, Variable::String(text) if !text.is_empty()),
        TestKind::Number => matches!(value, Variable::Number(_)),
        TestKind::Boolean => matches!(value, Variable::Bool(_)),
        // error values are objects too; arrays and dates are not
        TestKind::Object => matches!(value, Variable::Object(_) | Variable::Error(_)),
        TestKind::Array => matches!(value, Variable::Array(_)),
        TestKind::Function => matches!(value, Variable::Function(_)),
        TestKind::Error => matches!(value, Variable::Error(_)),
        TestKind::Date => matches!(value, Variable::Date(_)),
        TestKind::Url => value.as_str().is_some_and(is_web_url),
    }
}

fn is_web_url(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    Url::parse(text).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}
