//! The check core
//!
//! [`check_value`] evaluates a value against a [`Validator`] and resolves a
//! failure with the merged default/warn policy:
//!
//! 1. valid: the value is returned as-is (moved, never copied or coerced);
//! 2. invalid with a configured default: the default (computed if it is a
//!    function) is returned, after an optional warning;
//! 3. invalid without a default: a [`ValidationError`] is returned.
//!
//! Most callers go through [`ValidationContext::check`](crate::context::ValidationContext::check)
//! or the process-wide [`check`](crate::global::check), which supply the logger.

use crate::error::ValidationError;
use crate::logger::Logger;
use crate::predicate::is_nil;
use crate::validator::{CheckOptions, Validator};
use crate::value::Value;

/// Checks `value` against `validator`, reporting substitutions to `logger`.
///
/// `options` override the validator's embedded options field by field.
pub fn check_value(
    value: Value,
    validator: &Validator,
    options: &CheckOptions,
    logger: &dyn Logger,
) -> Result<Value, ValidationError> {
    if validator.test(&value) {
        return Ok(value);
    }

    let options = validator.options().merged(options);
    let name = options.name.as_deref();

    let Some(default) = options.default else {
        return Err(ValidationError::mismatch(&value, validator.expected(), name));
    };

    let substitute = resolve_default(default, &value);
    let should_warn = match &options.warn {
        Some(warn) => warn.test(&value),
        None => !is_nil(&value),
    };
    if should_warn {
        let message = ValidationError::get_message(&value, validator.expected(), name);
        logger.warn(&message, std::slice::from_ref(&substitute));
    }
    Ok(substitute)
}

/// Non-raising probe: does `value` pass `validator`'s predicate?
///
/// Defaults, warnings and messages are skipped entirely.
#[inline]
pub fn try_validate(value: &Value, validator: &Validator) -> bool {
    validator.test(value)
}

/// Function defaults are invoked with the rejected value; anything else is
/// used verbatim.
pub(crate) fn resolve_default(default: Value, value: &Value) -> Value {
    match default {
        Value::Function(f) => f.call(value),
        other => other,
    }
}

/// Checks that `value` is object-like and exposes a callable at `method`.
///
/// `method` may be a dot-separated path. Instances also resolve methods
/// inherited through their class chain.
///
/// ```rust
/// use runcheck::check::check_method;
/// use runcheck::value::{Class, Value};
///
/// let greeter = Class::builder("Greeter")
///     .method("greet", |_| Value::from("hi"))
///     .build();
///
/// assert!(check_method(greeter.instantiate().into(), "greet", None).is_ok());
/// assert!(check_method(Value::from(1), "greet", Some("g")).is_err());
/// ```
pub fn check_method(
    value: Value,
    method: &str,
    name: Option<&str>,
) -> Result<Value, ValidationError> {
    let has_method = value.is_object_like()
        && matches!(value.get_path(method), Some(Value::Function(_)));
    if has_method {
        Ok(value)
    } else {
        Err(ValidationError::missing_method(method, name))
    }
}

/// Runs [`check_method`] for each name in order; the first miss is returned.
pub fn check_methods<S: AsRef<str>>(
    value: Value,
    methods: &[S],
    name: Option<&str>,
) -> Result<Value, ValidationError> {
    methods
        .iter()
        .try_fold(value, |value, method| check_method(value, method.as_ref(), name))
}
