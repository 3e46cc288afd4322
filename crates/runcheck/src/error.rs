//! Error type for check failures
//!
//! A [`ValidationError`] is created at the point where a value fails a check
//! and no default is configured. Its `message` is the human-readable text
//! assembled by [`ValidationError::get_message`]; `code`, `field` and
//! `params` carry the same information in structured form.
//!
//! All string fields use `Cow<'static, str>` so static codes and labels do
//! not allocate.

use std::borrow::Cow;
use std::fmt;

use crate::value::Value;

/// Error code when an expected-type label is known.
pub const TYPE_MISMATCH: &str = "type_mismatch";
/// Error code when no label is known.
pub const INVALID_VALUE: &str = "invalid_value";
/// Error code for [`check_method`](crate::check::check_method) failures.
pub const MISSING_METHOD: &str = "missing_method";

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured check failure.
///
/// # Examples
///
/// ```rust
/// use runcheck::error::ValidationError;
/// use runcheck::value::Value;
///
/// let err = ValidationError::mismatch(&Value::from(1), Some("string"), Some("title"));
/// assert_eq!(err.message, "title: Expected string; 1 given.");
/// assert_eq!(err.field.as_deref(), Some("title"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// One of [`TYPE_MISMATCH`], [`INVALID_VALUE`], [`MISSING_METHOD`].
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Name of the checked field, if one was supplied.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value details, typically `expected` and `actual`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates an error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Creates the error raised when `value` fails a check.
    ///
    /// The message comes from [`get_message`](Self::get_message). An empty
    /// `name` is treated as absent.
    pub fn mismatch(value: &Value, expected: Option<&str>, name: Option<&str>) -> Self {
        let code = if expected.is_some() {
            TYPE_MISMATCH
        } else {
            INVALID_VALUE
        };
        let mut error = Self::new(code, Self::get_message(value, expected, name))
            .with_param("actual", value_type(value));
        if let Some(expected) = expected {
            error = error.with_param("expected", expected.to_owned());
        }
        match name.filter(|n| !n.is_empty()) {
            Some(name) => error.with_field(name.to_owned()),
            None => error,
        }
    }

    /// Creates the error raised when an object lacks a required method.
    pub fn missing_method(method: &str, name: Option<&str>) -> Self {
        let error = Self::new(
            MISSING_METHOD,
            format!("{}Missing method '{method}'.", name_prefix(name)),
        )
        .with_param("method", method.to_owned());
        match name.filter(|n| !n.is_empty()) {
            Some(name) => error.with_field(name.to_owned()),
            None => error,
        }
    }

    /// Builds the message describing why `value` was rejected.
    ///
    /// - `"<name>: Expected <expected>; <value> given."` with a label
    /// - `"<name>: Invalid value; <value> given."` without one
    ///
    /// The `"<name>: "` prefix is omitted when no name is given. Functions
    /// and classes are shown by name; every other value by its printed form.
    pub fn get_message(value: &Value, expected: Option<&str>, name: Option<&str>) -> String {
        let prefix = name_prefix(name);
        let given = value_type(value);
        match expected {
            Some(expected) => format!("{prefix}Expected {expected}; {given} given."),
            None => format!("{prefix}Invalid value; {given} given."),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON object for structured reporting.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

pub(crate) fn name_prefix(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("{name}: "),
        _ => String::new(),
    }
}

/// How a rejected value is shown in messages.
pub(crate) fn value_type(value: &Value) -> String {
    match value.callable_name() {
        Some(name) => name.to_owned(),
        None => value.to_string(),
    }
}
