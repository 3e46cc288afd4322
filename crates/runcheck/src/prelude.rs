//! Prelude module for convenient imports.
//!
//! ```rust
//! use runcheck::prelude::*;
//!
//! let tags = is_array_of(&IS_STRING);
//! assert!(check(Value::from(vec!["a", "b"]), &tags).is_ok());
//! ```

pub use crate::check::{check_method, check_methods, try_validate};
pub use crate::context::{TypeRef, ValidationContext, ValidationContextBuilder};
pub use crate::error::ValidationError;
pub use crate::global::{check, check_type, check_with, set_logger, set_validator};
pub use crate::logger::{Logger, NoopLogger, TracingLogger};
pub use crate::number::{parse_number_strict, safe_parse_number};
pub use crate::predicate::{
    Predicate, instance_of, is_alphanumeric, is_class, is_primitive, is_sub_class, sub_class,
};
pub use crate::validator::{
    CheckOptions, IS_ALPHANUMERIC, IS_ARRAY, IS_BOOLEAN, IS_CLASS, IS_NUMBER, IS_OBJECT,
    IS_PRIMITIVE, IS_STRING, Validator, is_array_of, is_instance_of, is_subclass_of,
};
pub use crate::value::{Class, Function, Instance, Map, Value};
