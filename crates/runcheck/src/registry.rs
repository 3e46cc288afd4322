//! Named validator registry
//!
//! Maps a type name to a [`NamedValidator`] for the
//! [`check_type`](crate::context::ValidationContext::check_type) entry point.
//! Keys are unique; registering an existing key replaces it.

use std::collections::HashMap;

use crate::predicate::{self, Predicate};

/// A registered predicate plus the name shown in messages.
#[derive(Debug, Clone)]
pub struct NamedValidator {
    pub name: String,
    pub predicate: Predicate,
}

/// Built-in entries seeded by [`ValidatorRegistry::with_builtins`].
pub const BUILTIN_TYPES: [&str; 7] = [
    "alphanumeric",
    "array",
    "boolean",
    "function",
    "number",
    "object",
    "string",
];

/// Type-name to predicate lookup table.
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    entries: HashMap<String, NamedValidator>,
}

impl ValidatorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the built-in type names.
    ///
    /// `alphanumeric` uses the permissive
    /// [`is_alphanumeric`](predicate::is_alphanumeric); `object` means a
    /// plain object.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let builtins: [(&str, fn(&crate::value::Value) -> bool); 7] = [
            ("alphanumeric", predicate::is_alphanumeric),
            ("array", predicate::is_array),
            ("boolean", predicate::is_boolean),
            ("function", predicate::is_function),
            ("number", predicate::is_number),
            ("object", predicate::is_plain_object),
            ("string", predicate::is_string),
        ];
        for (ty, f) in builtins {
            registry.set(ty, Predicate::new(f), None);
        }
        registry
    }

    /// Registers `predicate` under `ty`, replacing any previous entry.
    ///
    /// `name` defaults to `ty` and only affects messages.
    pub fn set(&mut self, ty: impl Into<String>, predicate: Predicate, name: Option<String>) {
        let ty = ty.into();
        let name = name.unwrap_or_else(|| ty.clone());
        self.entries.insert(ty, NamedValidator { name, predicate });
    }

    pub fn get(&self, ty: &str) -> Option<&NamedValidator> {
        self.entries.get(ty)
    }

    pub fn contains(&self, ty: &str) -> bool {
        self.entries.contains_key(ty)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered type names, sorted.
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}
