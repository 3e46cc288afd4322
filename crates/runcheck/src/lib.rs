//! # runcheck
//!
//! Runtime value checks with default substitution.
//!
//! A check evaluates a dynamic [`Value`](value::Value) against a
//! [`Validator`](validator::Validator) and either returns the value
//! unchanged, returns a configured default (optionally logging a warning),
//! or fails with a [`ValidationError`](error::ValidationError).
//!
//! ## Quick Start
//!
//! ```rust
//! use runcheck::prelude::*;
//!
//! // Valid values pass through untouched.
//! assert_eq!(check(Value::from(3), &IS_NUMBER), Ok(Value::from(3)));
//!
//! // Invalid values fail...
//! let err = check_with(Value::from(1), &IS_STRING, "title").unwrap_err();
//! assert_eq!(err.message, "title: Expected string; 1 given.");
//!
//! // ...unless a default is configured.
//! let options = CheckOptions::new().with_default(1);
//! assert_eq!(check_with(Value::Undefined, &IS_NUMBER, options), Ok(Value::from(1)));
//! ```
//!
//! ## Pieces
//!
//! - [`predicate`]: kind tests (`is_number`, `is_plain_object`, ...) and class
//!   tests (`is_sub_class`, `instance_of`)
//! - [`number`]: permissive `parse_float` and strict `safe_parse_number`
//! - [`validator`]: descriptors, the `IS_*` statics and combinators
//! - [`context`]: registry + logger, including the legacy `check_type`
//! - [`global`]: the same operations on a process-wide context

// ValidationError is returned by value from every check.
#![allow(clippy::result_large_err)]

pub mod check;
pub mod context;
pub mod error;
pub mod global;
pub mod logger;
pub mod number;
pub mod predicate;
pub mod prelude;
pub mod registry;
pub mod validator;
pub mod value;
