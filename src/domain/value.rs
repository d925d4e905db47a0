use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use serde_json::{Number, Value};

type CallableFn = dyn Fn(&[Variable]) -> Variable + Send + Sync;

/// Runtime value checked by the engine.
///
/// Mirrors the shapes a suite receives as input variables: the JSON data model plus
/// dates, error values and callables, which JSON cannot carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Variable>),
    Object(BTreeMap<String, Variable>),
    Date(DateTime<FixedOffset>),
    Error(String),
    Function(Callable),
}

impl Variable {
    /// Builds an empty object.
    pub fn object() -> Self {
        Self::Object(BTreeMap::new())
    }

    /// Builds an error value carrying `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Wraps a closure as a callable value.
    pub fn function<F>(name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&[Variable]) -> Variable + Send + Sync + 'static,
    {
        Self::Function(Callable {
            name: name.into(),
            inner: Arc::new(function),
        })
    }

    /// Inserts `value` under `key` when `self` is an object; builder-style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Variable>) -> Self {
        if let Self::Object(map) = &mut self {
            map.insert(key.into(), value.into());
        }
        self
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for values a source document may be: plain objects, arrays, dates and errors.
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            Self::Object(_) | Self::Array(_) | Self::Date(_) | Self::Error(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Variable>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Date(_) => "date",
            Self::Error(_) => "error",
            Self::Function(_) => "function",
        }
    }

    /// Replaces every RFC 3339 string (recursively) with a date value.
    pub fn promote_dates(self) -> Self {
        match self {
            Self::String(text) => match crate::util::time::parse_rfc3339(&text) {
                Some(date) => Self::Date(date),
                None => Self::String(text),
            },
            Self::Array(items) => Self::Array(items.into_iter().map(Self::promote_dates).collect()),
            Self::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, value.promote_dates()))
                    .collect(),
            ),
            other => other,
        }
    }
}

impl From<Value> for Variable {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(value),
            Value::Number(number) => Self::Number(number),
            Value::String(text) => Self::String(text),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Variable {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Variable {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Variable {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<u64> for Variable {
    fn from(value: u64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<i32> for Variable {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

/// Non-finite floats have no number representation and become `Null`.
impl From<f64> for Variable {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<DateTime<FixedOffset>> for Variable {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for Variable {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value.fixed_offset())
    }
}

impl<T: Into<Variable>> From<Vec<T>> for Variable {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Variable>> From<Option<T>> for Variable {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Named closure held by [`Variable::Function`]. Equality is identity.
#[derive(Clone)]
pub struct Callable {
    name: String,
    inner: Arc<CallableFn>,
}

impl Callable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Variable]) -> Variable {
        (self.inner)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Callable")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
