use tracing::{debug, trace};

use crate::domain::check::{Check, MessageMode, TestKind};
use crate::domain::error::CheckVerifyError;
use crate::domain::value::Variable;
use crate::domain::value_path;
use crate::engine::predicate;

const NO_OPEN_CHECK: &str = "The check method must be called first";
const SOURCE_NOT_OBJECT: &str = "source data must be an object to validate";
const OR_SEPARATOR: &str = " OR ";

/// Registers field checks and verifies them against a source value.
///
/// At most one check is open at a time. `check`/`optional` move the open check into the
/// finalized list before opening the next one; `verify` and `explain` finalize it as well.
/// Finalized checks are never touched again.
#[derive(Debug, Clone, Default)]
pub struct CheckVerify {
    mode: MessageMode,
    current: Option<Check>,
    checks: Vec<Check>,
    fast_fail_source: Option<Variable>,
}

/// Engine using the `the parameter "<field>" is not ...` messages.
pub fn validator() -> CheckVerify {
    CheckVerify::new(MessageMode::Parameter)
}

impl CheckVerify {
    pub fn new(mode: MessageMode) -> Self {
        Self {
            mode,
            current: None,
            checks: Vec::new(),
            fast_fail_source: None,
        }
    }

    /// Engine using the `The test suite expected ...` messages.
    pub fn suite() -> Self {
        Self::new(MessageMode::Suite)
    }

    /// Rebuilds an engine from already-declared checks, e.g. a rules file.
    ///
    /// Every field is validated the same way `check`/`optional` validate it.
    pub fn with_checks<I>(mode: MessageMode, checks: I) -> Result<Self, CheckVerifyError>
    where
        I: IntoIterator<Item = Check>,
    {
        let mut engine = Self::new(mode);
        for check in checks {
            engine.validate_field(&check.field)?;
            engine.checks.push(check);
        }
        Ok(engine)
    }

    pub fn mode(&self) -> MessageMode {
        self.mode
    }

    /// Opens a required check for `field`.
    pub fn check(&mut self, field: &str) -> Result<&mut Self, CheckVerifyError> {
        self.open(Check::required(field))
    }

    /// Opens a check for `field` that passes whenever the value is absent or null.
    pub fn optional(&mut self, field: &str) -> Result<&mut Self, CheckVerifyError> {
        self.open(Check::optional(field))
    }

    /// Appends `kind` to the open check.
    ///
    /// With fast-fail enabled the open check then runs against the bound source and its
    /// failure is returned; the test stays registered either way.
    pub fn test(&mut self, kind: TestKind) -> Result<&mut Self, CheckVerifyError> {
        let check = self
            .current
            .as_mut()
            .ok_or_else(|| CheckVerifyError::State(NO_OPEN_CHECK.to_string()))?;
        check.tests.push(kind);
        trace!(field = %check.field, test = %kind, "registered test");

        if let (Some(source), Some(check)) = (&self.fast_fail_source, &self.current) {
            if let Some(error) = self.run_tests(source, check) {
                debug!(field = %check.field, %error, "fast-fail check failed");
                return Err(error);
            }
        }
        Ok(self)
    }

    pub fn string(&mut self) -> Result<&mut Self, CheckVerifyError> {
        self.test(TestKind::String)
    }

    pub fn number(&mut self) -> Result<&mut Self, CheckVerifyError> {
        self.test(TestKind::Number)
    }

    pub fn boolean(&mut self) -> Result<&mut Self, CheckVerifyError> {
        self.test(TestKind::Boolean)
    }

    pub fn object(&mut self) -> Result<&mut Self, CheckVerifyError> {
        self.test(TestKind::Object)
    }

    pub fn array(&mut self) -> Result<&mut Self, CheckVerifyError> {
        self.test(TestKind::Array)
    }

    pub fn function(&mut self) -> Result<&mut Self, CheckVerifyError> {
        self.test(TestKind::Function)
    }

    pub fn error(&mut self) -> Result<&mut Self, CheckVerifyError> {
        self.test(TestKind::Error)
    }

    pub fn date(&mut self) -> Result<&mut Self, CheckVerifyError> {
        self.test(TestKind::Date)
    }

    pub fn url(&mut self) -> Result<&mut Self, CheckVerifyError> {
        self.test(TestKind::Url)
    }

    /// Documents that any value is accepted. Registers nothing.
    pub fn anything(&mut self) -> &mut Self {
        self
    }

    /// Turns the open check into an alternation: it passes when any one test passes.
    pub fn enable_or_mode(&mut self) -> Result<&mut Self, CheckVerifyError> {
        let check = self
            .current
            .as_mut()
            .ok_or_else(|| CheckVerifyError::State(NO_OPEN_CHECK.to_string()))?;
        check.or_mode = true;
        trace!(field = %check.field, "enabled or-mode");
        Ok(self)
    }

    /// Binds `source` and evaluates every subsequent registration against it immediately.
    pub fn enable_fast_fail(&mut self, source: Variable) -> Result<&mut Self, CheckVerifyError> {
        if !source.is_object_like() {
            return Err(CheckVerifyError::Source(SOURCE_NOT_OBJECT.to_string()));
        }
        self.fast_fail_source = Some(source);
        Ok(self)
    }

    pub fn disable_fast_fail(&mut self) -> &mut Self {
        self.fast_fail_source = None;
        self
    }

    pub fn fast_fail_enabled(&self) -> bool {
        self.fast_fail_source.is_some()
    }

    /// Runs every check in declaration order and returns the first failure.
    pub fn verify(&mut self, source: &Variable) -> Result<(), CheckVerifyError> {
        self.finalise();

        if !source.is_object_like() {
            return Err(CheckVerifyError::Source(SOURCE_NOT_OBJECT.to_string()));
        }

        debug!(check_count = self.checks.len(), mode = ?self.mode, "verifying source");
        for check in &self.checks {
            if let Some(error) = self.run_tests(source, check) {
                debug!(field = %check.field, %error, "check failed");
                return Err(error);
            }
        }
        debug!("all checks passed");
        Ok(())
    }

    /// Finalizes the open check and returns every declared check without running any.
    pub fn explain(&mut self) -> &[Check] {
        self.finalise();
        &self.checks
    }

    fn open(&mut self, check: Check) -> Result<&mut Self, CheckVerifyError> {
        self.validate_field(&check.field)?;
        self.finalise();
        trace!(field = %check.field, required = check.required, "opened check");
        self.current = Some(check);
        Ok(self)
    }

    fn validate_field(&self, field: &str) -> Result<(), CheckVerifyError> {
        if field.is_empty() {
            return Err(CheckVerifyError::Validation(
                self.mode.message("field", TestKind::String.descriptor()),
            ));
        }
        Ok(())
    }

    fn finalise(&mut self) {
        if let Some(check) = self.current.take() {
            self.checks.push(check);
        }
    }

    fn run_tests(&self, source: &Variable, check: &Check) -> Option<CheckVerifyError> {
        let value = value_path::lookup(source, &check.field);
        trace!(
            field = %check.field,
            tests = check.tests.len(),
            value = value.map_or("absent", Variable::kind_name),
            "running check"
        );

        if !check.required && value.is_none_or(Variable::is_null) {
            return None;
        }

        let mut failures = Vec::new();
        for kind in &check.tests {
            if predicate::passes(*kind, value) {
                continue;
            }
            let message = self.mode.message(&check.field, kind.descriptor());
            if !check.or_mode {
                return Some(CheckVerifyError::Validation(message));
            }
            failures.push(message);
        }

        self.combine_alternatives(check, failures)
    }

    /// An or-mode check fails only when every alternative failed; the messages are then
    /// joined with the mode prefix kept once at the front.
    fn combine_alternatives(&self, check: &Check, failures: Vec<String>) -> Option<CheckVerifyError> {
        if failures.is_empty() || failures.len() != check.tests.len() {
            return None;
        }

        let prefix = self.mode.prefix();
        let keep_prefix = failures[0].starts_with(prefix);
        let joined = failures
            .iter()
            .map(|message| message.strip_prefix(prefix).unwrap_or(message))
            .collect::<Vec<_>>()
            .join(OR_SEPARATOR);

        let message = if keep_prefix {
            format!("{prefix}{joined}")
        } else {
            joined
        };
        Some(CheckVerifyError::Validation(message))
    }
}
