//! Property-based tests for the check core.

use proptest::prelude::*;
use runcheck::number::{number_to_string, parse_float};
use runcheck::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        // NaN is the one value not equal to itself.
        any::<f64>()
            .prop_filter("comparable", |n| !n.is_nan())
            .prop_map(Value::from),
        ".{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(2, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::Array)
    })
}

fn quiet() -> ValidationContext {
    ValidationContext::builder()
        .logger(std::sync::Arc::new(NoopLogger))
        .build()
}

// ============================================================================
// PASS-THROUGH: p(v) implies check(v, p) == v
// ============================================================================

proptest! {
    #[test]
    fn valid_values_pass_through(v in arb_value()) {
        let ctx = quiet();
        for validator in [&*IS_NUMBER, &*IS_STRING, &*IS_BOOLEAN, &*IS_ARRAY, &*IS_PRIMITIVE] {
            let result = ctx.check(v.clone(), validator);
            if validator.test(&v) {
                prop_assert_eq!(result, Ok(v.clone()));
            } else {
                prop_assert!(result.is_err());
            }
        }
    }
}

// ============================================================================
// DEFAULTS: !p(v) implies check(v, p, {default: d}) == d
// ============================================================================

proptest! {
    #[test]
    fn invalid_values_get_literal_default(v in arb_value(), d in any::<i32>()) {
        let ctx = quiet();
        prop_assume!(!IS_STRING.test(&v));
        let out = ctx.check_with(v, &IS_STRING, CheckOptions::new().with_default(d));
        prop_assert_eq!(out, Ok(Value::from(d)));
    }

    #[test]
    fn invalid_values_get_computed_default(v in arb_value()) {
        let ctx = quiet();
        prop_assume!(!IS_NUMBER.test(&v));
        let expected = Value::from(format!("was {v}"));
        let out = ctx.check_with(
            v,
            &IS_NUMBER,
            CheckOptions::new().with_default_fn(|x| Value::from(format!("was {x}"))),
        );
        prop_assert_eq!(out, Ok(expected));
    }
}

// ============================================================================
// NUMBERS: canonical printing round-trips through both parsers
// ============================================================================

proptest! {
    #[test]
    fn canonical_form_round_trips(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        let printed = number_to_string(n);
        let parsed = parse_float(&printed);
        // -0 prints as "0".
        prop_assert_eq!(parsed, if n == 0.0 { 0.0 } else { n });
        prop_assert_eq!(safe_parse_number(&Value::from(printed)), Some(parsed));
    }

    #[test]
    fn leading_zeros_are_rejected(n in 1u32..100_000) {
        let padded = format!("0{n}");
        prop_assert_eq!(parse_number_strict(&Value::from(padded)), None);
    }
}
