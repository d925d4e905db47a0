use thiserror::Error;

/// Errors raised by check registration, verification and the suite runner.
///
/// `Display` is the human-readable message and nothing else; callers that need to tell
/// failures apart match on the variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckVerifyError {
    /// Data did not have the declared shape, or a field name was empty.
    #[error("{0}")]
    Validation(String),

    /// A test was registered while no check was open.
    #[error("{0}")]
    State(String),

    /// The value handed to `verify` is not an object.
    #[error("{0}")]
    Source(String),

    /// The suite runner was driven out of order.
    #[error("{0}")]
    Suite(String),
}

impl CheckVerifyError {
    /// True for data-shape failures, false for programmer misuse.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
