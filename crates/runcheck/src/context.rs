//! Validation context: registry plus logger
//!
//! A [`ValidationContext`] owns the state that checks read: the
//! [`ValidatorRegistry`] used by [`check_type`](ValidationContext::check_type)
//! and the [`Logger`] that receives substitution warnings. Contexts are plain
//! values; build one per component, or use the process-wide instance in
//! [`global`](crate::global).
//!
//! ```rust
//! use runcheck::context::ValidationContext;
//! use runcheck::validator::IS_NUMBER;
//! use runcheck::value::Value;
//!
//! let ctx = ValidationContext::new();
//! assert_eq!(ctx.check(Value::from(3), &IS_NUMBER), Ok(Value::from(3)));
//! assert!(ctx.check(Value::from("3"), &IS_NUMBER).is_err());
//! ```

use std::sync::Arc;

use crate::check::{check_value, resolve_default};
use crate::error::{ValidationError, name_prefix, value_type};
use crate::logger::{Logger, TracingLogger};
use crate::predicate::{Predicate, instance_of, is_nil};
use crate::registry::ValidatorRegistry;
use crate::validator::{CheckOptions, Validator};
use crate::value::{Class, Value};

// ============================================================================
// TYPE REFERENCE
// ============================================================================

/// What [`ValidationContext::check_type`] checks against.
#[derive(Debug, Clone)]
pub enum TypeRef {
    /// A key in the registry.
    Named(String),
    /// Instances of a class or its subclasses.
    Class(Class),
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<&Class> for TypeRef {
    fn from(class: &Class) -> Self {
        Self::Class(class.clone())
    }
}

impl From<Class> for TypeRef {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

// ============================================================================
// VALIDATION CONTEXT
// ============================================================================

/// Registry and logger used by checks.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    registry: ValidatorRegistry,
    logger: Arc<dyn Logger>,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationContext {
    /// Built-in registry entries and the `tracing` logger.
    pub fn new() -> Self {
        Self {
            registry: ValidatorRegistry::with_builtins(),
            logger: Arc::new(TracingLogger),
        }
    }

    pub fn builder() -> ValidationContextBuilder {
        ValidationContextBuilder::new()
    }

    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    /// Registers a predicate under `ty` for [`check_type`](Self::check_type).
    ///
    /// `name` is shown in messages instead of `ty`.
    pub fn set_validator(
        &mut self,
        ty: impl Into<String>,
        predicate: impl Into<Predicate>,
        name: Option<&str>,
    ) {
        let ty = ty.into();
        tracing::debug!(target: "runcheck", ty = %ty, "registering validator");
        self.registry.set(ty, predicate.into(), name.map(str::to_owned));
    }

    /// Replaces the logger wholesale.
    pub fn set_logger(&mut self, logger: Arc<dyn Logger>) {
        tracing::debug!(target: "runcheck", "replacing warning logger");
        self.logger = logger;
    }

    /// Checks `value` against `validator` using only its embedded options.
    pub fn check(&self, value: Value, validator: &Validator) -> Result<Value, ValidationError> {
        check_value(value, validator, &CheckOptions::default(), self.logger.as_ref())
    }

    /// Checks `value` with call-site options.
    ///
    /// `options` accepts a [`CheckOptions`] or a bare field name.
    pub fn check_with(
        &self,
        value: Value,
        validator: &Validator,
        options: impl Into<CheckOptions>,
    ) -> Result<Value, ValidationError> {
        check_value(value, validator, &options.into(), self.logger.as_ref())
    }

    /// Checks `value` against a registered type name or a class.
    ///
    /// - An unregistered name yields `Ok(Value::Bool(false))` without
    ///   checking anything; callers relying on this must compare explicitly.
    /// - A `default` of `None` or `Some(Value::Undefined)` means "no default":
    ///   a mismatch is an error.
    /// - Otherwise the default (called with the value if it is a function) is
    ///   returned, and `warn_if` (by default: value is not nil) decides
    ///   whether a warning is logged.
    pub fn check_type(
        &self,
        value: Value,
        ty: impl Into<TypeRef>,
        name: &str,
        default: Option<Value>,
        warn_if: Option<&Predicate>,
    ) -> Result<Value, ValidationError> {
        let (valid, expected) = match ty.into() {
            TypeRef::Class(class) => (
                instance_of(&class).test(&value),
                format!("instance of {}", class.name()),
            ),
            TypeRef::Named(ty) => match self.registry.get(&ty) {
                Some(entry) => (entry.predicate.test(&value), entry.name.clone()),
                None => return Ok(Value::Bool(false)),
            },
        };

        if valid {
            return Ok(value);
        }

        let default = match default {
            Some(Value::Undefined) | None => {
                return Err(ValidationError::mismatch(
                    &value,
                    Some(expected.as_str()),
                    Some(name),
                ));
            }
            Some(default) => resolve_default(default, &value),
        };

        let should_warn = warn_if.map_or_else(|| !is_nil(&value), |warn| warn.test(&value));
        if should_warn {
            let message = format!(
                "{}Expected {expected}; {} given. Using default:",
                name_prefix(Some(name)),
                value_type(&value)
            );
            self.logger.warn(&message, std::slice::from_ref(&default));
        }
        Ok(default)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`ValidationContext`].
///
/// ```rust
/// use std::sync::Arc;
/// use runcheck::context::ValidationContext;
/// use runcheck::logger::NoopLogger;
/// use runcheck::value::Value;
///
/// let ctx = ValidationContext::builder()
///     .without_builtins()
///     .validator("positive", |v: &Value| v.as_f64().is_some_and(|n| n > 0.0), None)
///     .logger(Arc::new(NoopLogger))
///     .build();
///
/// assert_eq!(ctx.registry().types(), vec!["positive"]);
/// ```
#[derive(Debug)]
pub struct ValidationContextBuilder {
    builtins: bool,
    extra: Vec<(String, Predicate, Option<String>)>,
    logger: Option<Arc<dyn Logger>>,
}

impl Default for ValidationContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationContextBuilder {
    pub fn new() -> Self {
        Self {
            builtins: true,
            extra: Vec::new(),
            logger: None,
        }
    }

    /// Starts from an empty registry.
    #[must_use = "builder methods must be chained or built"]
    pub fn without_builtins(mut self) -> Self {
        self.builtins = false;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn validator(
        mut self,
        ty: impl Into<String>,
        predicate: impl Into<Predicate>,
        name: Option<&str>,
    ) -> Self {
        self.extra.push((ty.into(), predicate.into(), name.map(str::to_owned)));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn build(self) -> ValidationContext {
        let mut registry = if self.builtins {
            ValidatorRegistry::with_builtins()
        } else {
            ValidatorRegistry::new()
        };
        for (ty, predicate, name) in self.extra {
            registry.set(ty, predicate, name);
        }
        ValidationContext {
            registry,
            logger: self.logger.unwrap_or_else(|| Arc::new(TracingLogger)),
        }
    }
}
