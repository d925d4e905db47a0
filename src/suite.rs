use tracing::debug;

use crate::domain::check::{MessageMode, TestKind};
use crate::domain::error::CheckVerifyError;
use crate::domain::value::Variable;
use crate::engine::expect::Expectation;
use crate::engine::predicate;

type SuiteCallback<H> = Box<dyn FnMut(&mut H, &Variable)>;

/// Guards a test-suite body behind expectations on its input variables.
///
/// `H` is whatever harness the body registers its tests with; the suite only hands it
/// through.
pub struct Suite<H> {
    expectations: Vec<Expectation>,
    callback: Option<SuiteCallback<H>>,
}

impl<H> Default for Suite<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Suite<H> {
    pub fn new() -> Self {
        Self {
            expectations: Vec::new(),
            callback: None,
        }
    }

    /// Declares an expectation on `variable_name` and returns it for chaining.
    pub fn expect(&mut self, variable_name: &str) -> Result<&mut Expectation, CheckVerifyError> {
        let name = Variable::from(variable_name);
        if !predicate::passes(TestKind::String, Some(&name)) {
            return Err(CheckVerifyError::Validation(
                MessageMode::Parameter.message("variableName", TestKind::String.descriptor()),
            ));
        }

        let index = self.expectations.len();
        self.expectations.push(Expectation::new(variable_name)?);
        Ok(&mut self.expectations[index])
    }

    /// Stores the suite body. A later call replaces the earlier one.
    pub fn declare<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(&mut H, &Variable) + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn expectations(&self) -> &[Expectation] {
        &self.expectations
    }

    /// Verifies every expectation against `variables`, then runs the body.
    ///
    /// The body does not run when any expectation fails.
    pub fn run(&mut self, harness: &mut H, variables: &Variable) -> Result<(), CheckVerifyError> {
        let Some(callback) = self.callback.as_mut() else {
            return Err(CheckVerifyError::Suite(
                "The declare method was not called before running the suite.".to_string(),
            ));
        };
        if variables.is_null() {
            return Err(CheckVerifyError::Suite(
                "The appropriate variables must be provided to run the suite.".to_string(),
            ));
        }

        debug!(expectations = self.expectations.len(), "running suite");
        for expectation in &mut self.expectations {
            expectation.verify(variables)?;
        }

        callback(harness, variables);
        Ok(())
    }
}
