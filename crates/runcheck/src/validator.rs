//! Validator descriptors and combinators
//!
//! A [`Validator`] bundles a [`Predicate`] with an optional "expected" label
//! (used only in messages) and embedded [`CheckOptions`]. The `IS_*` statics
//! cover the common kinds; [`is_array_of`], [`is_instance_of`] and
//! [`is_subclass_of`] build new descriptors.
//!
//! ```rust
//! use runcheck::validator::{IS_NUMBER, is_array_of};
//! use runcheck::value::Value;
//!
//! let numbers = is_array_of(&IS_NUMBER);
//! assert_eq!(numbers.expected(), Some("array of numbers"));
//! assert!(numbers.test(&Value::from(vec![1, 2, 3])));
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use crate::check::try_validate;
use crate::predicate::{self, Predicate};
use crate::value::{Class, Function, Value};

// ============================================================================
// CHECK OPTIONS
// ============================================================================

/// Default/warn policy and field name for a check.
///
/// `default` distinguishes "not configured" (`None`) from an explicit
/// undefined default (`Some(Value::Undefined)`). A [`Value::Function`]
/// default is called with the rejected value to compute the substitute.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub default: Option<Value>,
    pub warn: Option<Predicate>,
    pub name: Option<Cow<'static, str>>,
}

impl CheckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute `value` when the check fails.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Compute the substitute from the rejected value when the check fails.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.default = Some(Value::Function(Function::anonymous(f)));
        self
    }

    /// Decides whether substituting a default emits a warning.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_warn(mut self, warn: impl Into<Predicate>) -> Self {
        self.warn = Some(warn.into());
        self
    }

    /// Field name used in messages.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Layers `overrides` on top of `self`, field by field.
    #[must_use]
    pub fn merged(&self, overrides: &CheckOptions) -> CheckOptions {
        CheckOptions {
            default: overrides.default.clone().or_else(|| self.default.clone()),
            warn: overrides.warn.clone().or_else(|| self.warn.clone()),
            name: overrides.name.clone().or_else(|| self.name.clone()),
        }
    }
}

/// A bare string is shorthand for the field name.
impl From<&str> for CheckOptions {
    fn from(name: &str) -> Self {
        Self::new().with_name(name.to_owned())
    }
}

impl From<String> for CheckOptions {
    fn from(name: String) -> Self {
        Self::new().with_name(name)
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A predicate plus a human-readable label and embedded options.
#[derive(Debug, Clone)]
pub struct Validator {
    validate: Predicate,
    expected: Option<Cow<'static, str>>,
    options: CheckOptions,
}

impl Validator {
    pub fn new(validate: impl Into<Predicate>) -> Self {
        Self {
            validate: validate.into(),
            expected: None,
            options: CheckOptions::default(),
        }
    }

    /// Wraps a bare predicate with no label and no options.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(Predicate::new(f))
    }

    /// Sets the label shown as `Expected <label>` in messages.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_expected(mut self, expected: impl Into<Cow<'static, str>>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Replaces the embedded options.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: CheckOptions) -> Self {
        self.options = options;
        self
    }

    pub fn predicate(&self) -> &Predicate {
        &self.validate
    }

    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Runs the predicate alone, ignoring options.
    #[inline]
    pub fn test(&self, value: &Value) -> bool {
        self.validate.test(value)
    }
}

impl From<Predicate> for Validator {
    fn from(validate: Predicate) -> Self {
        Self::new(validate)
    }
}

/// A bare predicate becomes an unlabelled validator.
impl<F> From<F> for Validator
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(Predicate::new(f))
    }
}

// ============================================================================
// BUILT-IN DESCRIPTORS
// ============================================================================

fn labeled(validate: fn(&Value) -> bool, expected: &'static str) -> Validator {
    Validator::new(Predicate::new(validate)).with_expected(expected)
}

pub static IS_NUMBER: LazyLock<Validator> =
    LazyLock::new(|| labeled(predicate::is_number, "number"));

pub static IS_OBJECT: LazyLock<Validator> =
    LazyLock::new(|| labeled(predicate::is_plain_object, "plain object"));

pub static IS_BOOLEAN: LazyLock<Validator> =
    LazyLock::new(|| labeled(predicate::is_boolean, "boolean"));

pub static IS_STRING: LazyLock<Validator> =
    LazyLock::new(|| labeled(predicate::is_string, "string"));

pub static IS_ARRAY: LazyLock<Validator> = LazyLock::new(|| labeled(predicate::is_array, "array"));

/// Strict form: strings and numbers only. The registry's `alphanumeric`
/// entry uses the permissive [`predicate::is_alphanumeric`] instead.
pub static IS_ALPHANUMERIC: LazyLock<Validator> = LazyLock::new(|| {
    labeled(
        |value| predicate::is_string(value) || predicate::is_number(value),
        "alphanumeric",
    )
});

pub static IS_PRIMITIVE: LazyLock<Validator> =
    LazyLock::new(|| labeled(predicate::is_primitive, "primitive"));

pub static IS_CLASS: LazyLock<Validator> = LazyLock::new(|| labeled(predicate::is_class, "class"));

// ============================================================================
// COMBINATORS
// ============================================================================

/// Arrays whose every item passes `item`.
///
/// Items are probed with [`try_validate`], so the item validator's defaults
/// and warnings never apply inside the array.
pub fn is_array_of(item: &Validator) -> Validator {
    let expected = format!("array of {}s", item.expected().unwrap_or("unspecified value"));
    let item = item.clone();
    Validator::new(Predicate::new(move |value| match value {
        Value::Array(items) => items.iter().all(|v| try_validate(v, &item)),
        _ => false,
    }))
    .with_expected(expected)
}

/// Instances of `class` or its subclasses. Labelled with the class name.
pub fn is_instance_of(class: &Class) -> Validator {
    Validator::new(predicate::instance_of(class)).with_expected(class.name().to_owned())
}

/// Classes deriving from `class`; `class` itself passes when
/// `include_identity` is set.
pub fn is_subclass_of(class: &Class, include_identity: bool) -> Validator {
    Validator::new(predicate::sub_class(class, include_identity))
        .with_expected(format!("subclass of {}", class.name()))
}
