//! Predicates over [`Value`]
//!
//! Pure, total functions answering "is this value of kind K?". They never
//! fail. [`Predicate`] wraps any such test as a cloneable, shareable handle
//! so it can be stored in a [`Validator`](crate::validator::Validator) or the
//! [`ValidatorRegistry`](crate::registry::ValidatorRegistry).

use std::fmt;
use std::sync::Arc;

use crate::number::parse_float;
use crate::value::{Class, Value};

// ============================================================================
// PREDICATE HANDLE
// ============================================================================

type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// A shareable boolean test over a single value.
///
/// ```rust
/// use runcheck::predicate::{Predicate, is_string};
/// use runcheck::value::Value;
///
/// let p = Predicate::new(is_string);
/// assert!(p.test(&Value::from("x")));
/// assert!(!p.test(&Value::from(1)));
/// ```
#[derive(Clone)]
pub struct Predicate(Arc<PredicateFn>);

impl Predicate {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn test(&self, value: &Value) -> bool {
        (self.0)(value)
    }

    /// Logical negation of this predicate.
    #[must_use]
    pub fn negate(&self) -> Self {
        let inner = self.clone();
        Self::new(move |value| !inner.test(value))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

impl<F> From<F> for Predicate
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

// ============================================================================
// KIND PREDICATES
// ============================================================================

/// True for any number, `NaN` included.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// True only for bare structural records. Arrays, functions, classes and
/// class instances are not plain objects.
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// True for anything invocable: functions and classes.
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_) | Value::Class(_))
}

/// True for anything constructible. Same set as [`is_function`].
pub fn is_class(value: &Value) -> bool {
    is_function(value)
}

/// True for strings, numbers and booleans.
pub fn is_primitive(value: &Value) -> bool {
    is_string(value) || is_number(value) || is_boolean(value)
}

/// True for `null` and `undefined`.
pub fn is_nil(value: &Value) -> bool {
    matches!(value, Value::Null | Value::Undefined)
}

/// Permissive alphanumeric test.
///
/// True for any string, and for any value whose printed form starts with a
/// number according to [`parse_float`]. This accepts `[1]` (prints as `"1"`)
/// and rejects `true` and `NaN`.
pub fn is_alphanumeric(value: &Value) -> bool {
    is_string(value) || !parse_float(&value.to_string()).is_nan()
}

// ============================================================================
// CLASS PREDICATES
// ============================================================================

/// Checks whether `value` is `parent` or one of its subclasses.
///
/// Returns false for anything that is not class-like. A bare function has no
/// supertype chain, so it can only match through identity.
/// `include_identity` controls whether `parent` counts as its own subclass.
///
/// ```rust
/// use runcheck::predicate::is_sub_class;
/// use runcheck::value::{Class, Value};
///
/// let base = Class::new("Base");
/// let child = Class::extends("Child", &base);
///
/// assert!(is_sub_class(&Value::from(&child), &base, true));
/// assert!(is_sub_class(&Value::from(&base), &base, true));
/// assert!(!is_sub_class(&Value::from(&base), &base, false));
/// ```
pub fn is_sub_class(value: &Value, parent: &Class, include_identity: bool) -> bool {
    match value {
        Value::Class(class) => class.inherits_from(parent) || (include_identity && class == parent),
        _ => false,
    }
}

/// Builds a predicate testing [`is_sub_class`] against `parent`.
pub fn sub_class(parent: &Class, include_identity: bool) -> Predicate {
    let parent = parent.clone();
    Predicate::new(move |value| is_sub_class(value, &parent, include_identity))
}

/// Builds a predicate that is true for instances of `class` or its subclasses.
pub fn instance_of(class: &Class) -> Predicate {
    let class = class.clone();
    Predicate::new(move |value| matches!(value, Value::Instance(i) if i.is_instance_of(&class)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Function, Map};
    use rstest::rstest;

    fn func() -> Value {
        Value::from(Function::new("f", |v| v.clone()))
    }

    #[rstest]
    #[case(Value::from(1), true)]
    #[case(Value::from(f64::NAN), true)]
    #[case(Value::from("1"), false)]
    #[case(Value::Null, false)]
    fn number(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_number(&value), expected);
    }

    #[test]
    fn plain_object_excludes_other_composites() {
        let class = Class::new("Thing");
        assert!(is_plain_object(&Value::Object(Map::new())));
        assert!(!is_plain_object(&Value::Array(vec![])));
        assert!(!is_plain_object(&func()));
        assert!(!is_plain_object(&Value::from(class.instantiate())));
        assert!(!is_plain_object(&Value::Null));
    }

    #[test]
    fn functions_and_classes_are_invocable() {
        assert!(is_function(&func()));
        assert!(is_class(&func()));
        assert!(is_class(&Value::from(Class::new("A"))));
        assert!(!is_class(&Value::from("A")));
    }

    #[rstest]
    #[case(Value::from("x"), true)]
    #[case(Value::from(0), true)]
    #[case(Value::from(false), true)]
    #[case(Value::Null, false)]
    #[case(Value::Array(vec![]), false)]
    fn primitive(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_primitive(&value), expected);
    }

    #[rstest]
    #[case(Value::from(""), true)]
    #[case(Value::from("abc"), true)]
    #[case(Value::from(12), true)]
    #[case(Value::from(vec![1]), true)]
    #[case(Value::from(f64::NAN), false)]
    #[case(Value::from(true), false)]
    #[case(Value::Null, false)]
    #[case(Value::Undefined, false)]
    #[case(Value::Object(Map::new()), false)]
    fn alphanumeric_is_permissive(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_alphanumeric(&value), expected);
    }

    #[test]
    fn nil() {
        assert!(is_nil(&Value::Null));
        assert!(is_nil(&Value::Undefined));
        assert!(!is_nil(&Value::from(0)));
        assert!(!is_nil(&Value::from("")));
    }

    #[test]
    fn sub_class_respects_identity_flag() {
        let base = Class::new("Base");
        let child = Class::extends("Child", &base);
        let unrelated = Class::new("Other");

        assert!(is_sub_class(&Value::from(&child), &base, false));
        assert!(is_sub_class(&Value::from(&base), &base, true));
        assert!(!is_sub_class(&Value::from(&base), &base, false));
        assert!(!is_sub_class(&Value::from(&base), &child, true));
        assert!(!is_sub_class(&Value::from(&unrelated), &base, true));
        assert!(!is_sub_class(&Value::from(child.instantiate()), &base, true));
        assert!(!is_sub_class(&func(), &base, true));

        let p = sub_class(&base, true);
        assert!(p.test(&Value::from(&child)));
        assert!(p.test(&Value::from(&base)));
    }

    #[test]
    fn instance_of_walks_class_chain() {
        let base = Class::new("Base");
        let child = Class::extends("Child", &base);
        let p = instance_of(&base);

        assert!(p.test(&Value::from(base.instantiate())));
        assert!(p.test(&Value::from(child.instantiate())));
        assert!(!p.test(&Value::from(&base)));
        assert!(!instance_of(&child).test(&Value::from(base.instantiate())));
    }

    #[test]
    fn negate_inverts() {
        let p = Predicate::new(is_string).negate();
        assert!(p.test(&Value::from(1)));
        assert!(!p.test(&Value::from("s")));
    }
}
