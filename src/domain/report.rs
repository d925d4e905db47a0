use serde::{Deserialize, Serialize};

/// Outcome of verifying one input document against a rules file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyReport {
    pub matched: bool,
    pub check_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerifyReport {
    pub fn passed(check_count: usize) -> Self {
        Self {
            matched: true,
            check_count,
            message: None,
        }
    }

    pub fn failed(check_count: usize, message: impl Into<String>) -> Self {
        Self {
            matched: false,
            check_count,
            message: Some(message.into()),
        }
    }
}
