//! Process-wide default context
//!
//! The free functions here operate on a single shared [`ValidationContext`]
//! stored in an `ArcSwap`: reads take a lock-free snapshot, and
//! [`set_validator`] / [`set_logger`] publish a modified copy. Concurrent
//! writers do not lose updates, but configuration is meant to happen once at
//! start-up.
//!
//! Prefer an explicit [`ValidationContext`] in library code; these functions
//! exist for applications that want one global configuration.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::context::{TypeRef, ValidationContext};
use crate::error::ValidationError;
use crate::logger::Logger;
use crate::predicate::Predicate;
use crate::validator::{CheckOptions, Validator};
use crate::value::Value;

static GLOBAL_CONTEXT: LazyLock<ArcSwap<ValidationContext>> =
    LazyLock::new(|| ArcSwap::from_pointee(ValidationContext::new()));

/// Snapshot of the current process-wide context.
#[inline]
pub fn current() -> Arc<ValidationContext> {
    GLOBAL_CONTEXT.load_full()
}

/// Checks `value` with the process-wide context. See
/// [`ValidationContext::check`].
pub fn check(value: Value, validator: &Validator) -> Result<Value, ValidationError> {
    GLOBAL_CONTEXT.load().check(value, validator)
}

/// Checks `value` with call-site options. See
/// [`ValidationContext::check_with`].
pub fn check_with(
    value: Value,
    validator: &Validator,
    options: impl Into<CheckOptions>,
) -> Result<Value, ValidationError> {
    GLOBAL_CONTEXT.load().check_with(value, validator, options)
}

/// Checks `value` against a registered type name or class. See
/// [`ValidationContext::check_type`].
pub fn check_type(
    value: Value,
    ty: impl Into<TypeRef>,
    name: &str,
    default: Option<Value>,
    warn_if: Option<&Predicate>,
) -> Result<Value, ValidationError> {
    GLOBAL_CONTEXT
        .load()
        .check_type(value, ty, name, default, warn_if)
}

/// Registers a predicate in the process-wide registry.
pub fn set_validator(ty: &str, predicate: impl Into<Predicate>, name: Option<&str>) {
    let predicate = predicate.into();
    GLOBAL_CONTEXT.rcu(|ctx| {
        let mut next = ValidationContext::clone(ctx);
        next.set_validator(ty, predicate.clone(), name);
        next
    });
}

/// Replaces the process-wide logger.
pub fn set_logger(logger: Arc<dyn Logger>) {
    GLOBAL_CONTEXT.rcu(|ctx| {
        let mut next = ValidationContext::clone(ctx);
        next.set_logger(Arc::clone(&logger));
        next
    });
}

/// Replaces the whole process-wide context.
pub fn install(context: ValidationContext) {
    GLOBAL_CONTEXT.store(Arc::new(context));
}
