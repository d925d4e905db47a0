use serde::{Deserialize, Serialize};

use crate::domain::check::{Check, MessageMode};

/// Declarative check list loaded from a rules file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckRules {
    #[serde(default)]
    pub mode: MessageMode,
    #[serde(default)]
    pub checks: Vec<Check>,
}
