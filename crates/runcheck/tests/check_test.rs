//! Scenario tests for the check entry points.

use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use runcheck::error::TYPE_MISMATCH;
use runcheck::prelude::*;

#[derive(Default)]
struct Recorder(Mutex<Vec<String>>);

impl Logger for Recorder {
    fn warn(&self, message: &str, _context: &[Value]) {
        self.0.lock().push(message.to_owned());
    }
}

fn context_with_recorder() -> (ValidationContext, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let ctx = ValidationContext::builder().logger(recorder.clone()).build();
    (ctx, recorder)
}

// ============================================================================
// CHECK
// ============================================================================

#[test]
fn returns_unmodified_input_if_it_passes() {
    let (ctx, _) = context_with_recorder();
    let mut fields = Map::new();
    fields.insert("a".into(), Value::from(1));
    let input = Value::Object(fields);
    assert_eq!(ctx.check(input.clone(), &IS_OBJECT), Ok(input));
}

#[test]
fn bare_predicate_is_accepted() {
    let (ctx, _) = context_with_recorder();
    let positive = Validator::from_fn(|v| v.as_f64().is_some_and(|n| n > 0.0));
    assert_eq!(ctx.check(Value::from(2), &positive), Ok(Value::from(2)));
    let err = ctx.check(Value::from(-2), &positive).unwrap_err();
    assert_eq!(err.message, "Invalid value; -2 given.");
}

#[test]
fn throws_if_input_does_not_pass() {
    let (ctx, _) = context_with_recorder();
    let err = ctx.check(Value::from(1), &IS_STRING).unwrap_err();
    assert_eq!(err.code, TYPE_MISMATCH);
    assert!(err.message.contains("Expected string"));
    assert!(ctx.check(Value::from("a"), &IS_NUMBER).is_err());
}

#[test]
fn undefined_with_literal_default() {
    let (ctx, recorder) = context_with_recorder();
    let out = ctx.check_with(
        Value::Undefined,
        &IS_NUMBER,
        CheckOptions::new().with_default(1).with_name("value"),
    );
    assert_eq!(out, Ok(Value::from(1)));
    assert!(recorder.0.lock().is_empty());
}

#[test]
fn explicit_undefined_default() {
    let (ctx, _) = context_with_recorder();
    let out = ctx.check_with(
        Value::from(1),
        &IS_STRING,
        CheckOptions::new().with_default(Value::Undefined),
    );
    assert_eq!(out, Ok(Value::Undefined));
}

#[test]
fn computed_default() {
    let (ctx, recorder) = context_with_recorder();
    let out = ctx.check_with(
        Value::from("a"),
        &IS_NUMBER,
        CheckOptions::new()
            .with_default_fn(|_| Value::from(2))
            .with_name("value"),
    );
    assert_eq!(out, Ok(Value::from(2)));
    assert_eq!(
        *recorder.0.lock(),
        vec!["value: Expected number; a given.".to_owned()]
    );
}

#[test]
fn array_of_numbers() {
    let (ctx, _) = context_with_recorder();
    let numbers = is_array_of(&IS_NUMBER);
    assert!(ctx.check(Value::from(vec![1, 2, 3]), &numbers).is_ok());

    let mixed = Value::Array(vec![Value::from(1), Value::from("2"), Value::from(3)]);
    let err = ctx.check_with(mixed, &numbers, "ids").unwrap_err();
    assert_eq!(err.message, "ids: Expected array of numbers; 1,2,3 given.");
}

#[test]
fn instances_and_subclasses() {
    let (ctx, _) = context_with_recorder();
    let model = Class::new("Model");
    let user = Class::extends("User", &model);

    let instance = Value::from(user.instantiate().with_field("id", 7));
    assert_eq!(ctx.check(instance.clone(), &is_instance_of(&model)), Ok(instance));

    let err = ctx
        .check(Value::from(&model), &is_subclass_of(&model, false))
        .unwrap_err();
    assert_eq!(err.message, "Expected subclass of Model; Model given.");
    assert!(ctx.check(Value::from(&user), &is_subclass_of(&model, false)).is_ok());
}

#[test]
fn json_documents_can_be_checked() {
    let (ctx, _) = context_with_recorder();
    let doc = Value::from(serde_json::json!({"tags": ["a", "b"]}));
    let tags = doc.get_path("tags").unwrap();
    assert!(ctx.check(tags, &is_array_of(&IS_STRING)).is_ok());
}

// ============================================================================
// CHECK TYPE
// ============================================================================

#[test]
fn check_type_unregistered_returns_false() {
    let (ctx, _) = context_with_recorder();
    assert_eq!(
        ctx.check_type(Value::from(5), "unregisteredType", "x", None, None),
        Ok(Value::Bool(false))
    );
}

#[test]
fn check_type_custom_validator() {
    let (mut ctx, recorder) = context_with_recorder();
    ctx.set_validator(
        "nonEmpty",
        |v: &Value| v.as_str().is_some_and(|s| !s.is_empty()),
        Some("non-empty string"),
    );

    assert_eq!(
        ctx.check_type(Value::from("x"), "nonEmpty", "title", None, None),
        Ok(Value::from("x"))
    );
    assert_eq!(
        ctx.check_type(Value::from(""), "nonEmpty", "title", Some("untitled".into()), None),
        Ok(Value::from("untitled"))
    );
    assert_eq!(
        *recorder.0.lock(),
        vec!["title: Expected non-empty string;  given. Using default:".to_owned()]
    );
}

// ============================================================================
// PREDICATES
// ============================================================================

#[test]
fn strict_number_parsing() {
    assert_eq!(parse_number_strict(&Value::from("007")), None);
    assert_eq!(parse_number_strict(&Value::from("7")), Some(7.0));
    assert_eq!(parse_number_strict(&Value::from(7)), Some(7.0));
    assert_eq!(parse_number_strict(&Value::from("abc")), None);
    assert_eq!(parse_number_strict(&Value::from(true)), None);
}

#[test]
fn subclass_identity() {
    let parent = Class::new("Parent");
    let child = Class::extends("Child", &parent);
    assert!(is_sub_class(&Value::from(&child), &parent, true));
    assert!(is_sub_class(&Value::from(&parent), &parent, true));
    assert!(!is_sub_class(&Value::from(&parent), &parent, false));
}

#[test]
fn method_checks() {
    let service = Class::builder("Service")
        .method("start", |_| Value::Undefined)
        .build();
    let value: Value = service.instantiate().into();
    assert!(check_methods(value.clone(), &["start"], Some("svc")).is_ok());
    let err = check_method(value, "stop", Some("svc")).unwrap_err();
    assert_eq!(err.to_string(), "svc: Missing method 'stop'.");
}
