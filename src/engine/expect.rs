use crate::domain::check::{Check, MessageMode, TestKind};
use crate::domain::error::CheckVerifyError;
use crate::domain::value::Variable;
use crate::engine::check_verify::CheckVerify;
use crate::engine::predicate;

/// Readable chain over a single-field [`CheckVerify`].
///
/// ```
/// use checkverify::{Variable, expect};
/// use serde_json::json;
///
/// let mut params = expect("SERVICE_PARAMS")?;
/// params.to().be().an().object().or().an().array();
/// params.verify(&Variable::from(json!({"SERVICE_PARAMS": [1, 2, 3]})))?;
/// # Ok::<(), checkverify::CheckVerifyError>(())
/// ```
///
/// Chained calls never fail on their own. An engine error raised while chaining (a test
/// added after the expectation was verified, for instance) is kept and returned by the next
/// [`verify`](Self::verify).
#[derive(Debug, Clone)]
pub struct Expectation {
    field: String,
    checker: CheckVerify,
    deferred: Option<CheckVerifyError>,
}

/// Opens a required, suite-mode expectation on `field`.
pub fn expect(field: &str) -> Result<Expectation, CheckVerifyError> {
    Expectation::new(field)
}

impl Expectation {
    pub fn new(field: &str) -> Result<Self, CheckVerifyError> {
        let mut checker = CheckVerify::suite();
        checker.check(field)?;
        Ok(Self {
            field: field.to_string(),
            checker,
            deferred: None,
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn a(&mut self) -> &mut Self {
        self
    }

    pub fn an(&mut self) -> &mut Self {
        self
    }

    pub fn to(&mut self) -> &mut Self {
        self
    }

    pub fn be(&mut self) -> &mut Self {
        self
    }

    pub fn is(&mut self) -> &mut Self {
        self
    }

    pub fn that(&mut self) -> &mut Self {
        self
    }

    /// Makes the check pass when any of its tests passes.
    pub fn or(&mut self) -> &mut Self {
        let result = self.checker.enable_or_mode().map(|_| ());
        self.defer(result)
    }

    pub fn string(&mut self) -> &mut Self {
        self.register(TestKind::String)
    }

    pub fn number(&mut self) -> &mut Self {
        self.register(TestKind::Number)
    }

    pub fn boolean(&mut self) -> &mut Self {
        self.register(TestKind::Boolean)
    }

    pub fn object(&mut self) -> &mut Self {
        self.register(TestKind::Object)
    }

    pub fn array(&mut self) -> &mut Self {
        self.register(TestKind::Array)
    }

    pub fn function(&mut self) -> &mut Self {
        self.register(TestKind::Function)
    }

    pub fn error(&mut self) -> &mut Self {
        self.register(TestKind::Error)
    }

    pub fn date(&mut self) -> &mut Self {
        self.register(TestKind::Date)
    }

    pub fn url(&mut self) -> &mut Self {
        self.register(TestKind::Url)
    }

    pub fn anything(&mut self) -> &mut Self {
        self.checker.anything();
        self
    }

    /// Checks the expectation against `variables`, which must be an object.
    pub fn verify(&mut self, variables: &Variable) -> Result<(), CheckVerifyError> {
        if let Some(error) = &self.deferred {
            return Err(error.clone());
        }
        if !predicate::passes(TestKind::Object, Some(variables)) {
            return Err(CheckVerifyError::Validation(
                MessageMode::Parameter.message("variables", TestKind::Object.descriptor()),
            ));
        }
        self.checker.verify(variables)
    }

    pub fn explain(&mut self) -> &[Check] {
        self.checker.explain()
    }

    fn register(&mut self, kind: TestKind) -> &mut Self {
        let result = self.checker.test(kind).map(|_| ());
        self.defer(result)
    }

    fn defer(&mut self, result: Result<(), CheckVerifyError>) -> &mut Self {
        if let Err(error) = result {
            self.deferred.get_or_insert(error);
        }
        self
    }
}
