use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Primitive type test a check can run against a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Function,
    Error,
    Date,
    Url,
}

impl TestKind {
    pub const ALL: [TestKind; 9] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Object,
        Self::Array,
        Self::Function,
        Self::Error,
        Self::Date,
        Self::Url,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Function => "function",
            Self::Error => "error",
            Self::Date => "date",
            Self::Url => "url",
        }
    }

    /// Phrase used in failure messages (`... to be <descriptor>`).
    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::String => "a populated string",
            Self::Number => "a number",
            Self::Boolean => "a boolean",
            Self::Object => "an object",
            Self::Array => "an array",
            Self::Function => "a function",
            Self::Error => "an error",
            Self::Date => "a date",
            Self::Url => "a url",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown test `{s}`"))
    }
}

/// One declared expectation about a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Check {
    pub field: String,
    #[serde(default)]
    pub tests: Vec<TestKind>,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub or_mode: bool,
}

impl Check {
    pub fn required(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            tests: Vec::new(),
            required: true,
            or_mode: false,
        }
    }

    pub fn optional(field: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(field)
        }
    }
}

fn default_required() -> bool {
    true
}

/// Message template selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageMode {
    /// `The test suite expected "<field>" to be <descriptor>`
    #[default]
    Suite,
    /// `the parameter "<field>" is not <descriptor>`
    Parameter,
}

impl MessageMode {
    /// Leading text shared by every message of this mode; stripped when OR-messages are joined.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Suite => "The test suite expected ",
            Self::Parameter => "the parameter ",
        }
    }

    pub fn message(&self, field: &str, descriptor: &str) -> String {
        match self {
            Self::Suite => format!("The test suite expected \"{field}\" to be {descriptor}"),
            Self::Parameter if field.is_empty() => format!("parameter is not {descriptor}"),
            Self::Parameter => format!("the parameter \"{field}\" is not {descriptor}"),
        }
    }
}
