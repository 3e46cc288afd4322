//! Dynamic value model
//!
//! Everything a check inspects is a [`Value`]. Besides the JSON-like data
//! variants it carries three reflective kinds:
//!
//! - [`Function`]: a named callable, used for computed defaults and methods.
//! - [`Class`]: a named type with an explicit parent chain and a method table.
//! - [`Instance`]: an object created from a class.
//!
//! Printing (`Display`) follows the host convention of `String(value)`, so an
//! array prints as its comma-joined items and a plain object as
//! `[object Object]`. Error messages and the permissive numeric parse both
//! depend on this form.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::number::number_to_string;

/// Insertion-ordered field map used by objects and instances.
pub type Map = IndexMap<String, Value>;

// ============================================================================
// VALUE
// ============================================================================

/// A runtime value of unknown shape.
#[derive(Clone, Default)]
pub enum Value {
    /// The absent sentinel. Distinct from [`Value::Null`].
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// A bare structural record.
    Object(Map),
    Function(Function),
    Class(Class),
    Instance(Instance),
}

impl Value {
    /// Human-readable kind name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
            Self::Class(_) => "class",
            Self::Instance(_) => "instance",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Name of an invocable value (function or class).
    pub fn callable_name(&self) -> Option<&str> {
        match self {
            Self::Function(f) => Some(f.name()),
            Self::Class(c) => Some(c.name()),
            _ => None,
        }
    }

    /// True for anything that carries properties: objects, arrays, functions,
    /// classes and instances.
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            Self::Array(_)
                | Self::Object(_)
                | Self::Function(_)
                | Self::Class(_)
                | Self::Instance(_)
        )
    }

    /// Resolves a dot-separated property path.
    ///
    /// Instances resolve own fields first, then methods along the class chain.
    /// Classes expose no members of their own.
    /// Arrays accept numeric segments.
    pub fn get_path(&self, path: &str) -> Option<Value> {
        let mut current = self.clone();
        for segment in path.split('.') {
            current = current.get(segment)?;
        }
        Some(current)
    }

    fn get(&self, key: &str) -> Option<Value> {
        match self {
            Self::Object(fields) => fields.get(key).cloned(),
            Self::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i).cloned()),
            Self::Instance(instance) => instance
                .fields
                .get(key)
                .cloned()
                .or_else(|| instance.class.find_method(key).map(Value::Function)),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a == b,
            (Self::Class(a), Self::Class(b)) => a == b,
            (Self::Instance(a), Self::Instance(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&number_to_string(*n)),
            Self::String(s) => f.write_str(s),
            Self::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // Nil items print as empty slots.
                    if !matches!(item, Self::Undefined | Self::Null) {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) | Self::Instance(_) => f.write_str("[object Object]"),
            Self::Function(func) => write!(f, "function {}", func.name()),
            Self::Class(class) => write!(f, "class {}", class.name()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("Undefined"),
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Self::Object(fields) => f.debug_tuple("Object").field(fields).finish(),
            Self::Function(func) => fmt::Debug::fmt(func, f),
            Self::Class(class) => fmt::Debug::fmt(class, f),
            Self::Instance(instance) => fmt::Debug::fmt(instance, f),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Map> for Value {
    fn from(fields: Map) -> Self {
        Self::Object(fields)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Self::Function(func)
    }
}

impl From<Class> for Value {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

impl From<&Class> for Value {
    fn from(class: &Class) -> Self {
        Self::Class(class.clone())
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Self::Instance(instance)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

// ============================================================================
// FUNCTION
// ============================================================================

type Callable = dyn Fn(&Value) -> Value + Send + Sync;

/// A named callable value.
///
/// Equality is identity: two handles are equal only if they share the same
/// underlying closure.
#[derive(Clone)]
pub struct Function {
    name: Arc<str>,
    call: Arc<Callable>,
}

impl Function {
    pub fn new<F>(name: impl Into<Arc<str>>, call: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            call: Arc::new(call),
        }
    }

    /// An anonymous function. Its name prints as the empty string.
    pub fn anonymous<F>(call: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::new("", call)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, arg: &Value) -> Value {
        (self.call)(arg)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.call, &other.call)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Function").field(&self.name).finish()
    }
}

// ============================================================================
// CLASS
// ============================================================================

#[derive(Debug)]
struct ClassInner {
    name: String,
    parent: Option<Class>,
    methods: IndexMap<String, Function>,
}

/// A named, constructible type with an explicit supertype chain.
///
/// Classes are reference types: cloning a `Class` yields another handle to
/// the same class, and equality is identity.
///
/// ```rust
/// use runcheck::value::Class;
///
/// let animal = Class::new("Animal");
/// let dog = Class::extends("Dog", &animal);
///
/// assert!(dog.inherits_from(&animal));
/// assert!(!animal.inherits_from(&dog));
/// ```
#[derive(Debug, Clone)]
pub struct Class(Arc<ClassInner>);

impl Class {
    /// A root class with no parent and no methods.
    pub fn new(name: impl Into<String>) -> Self {
        ClassBuilder::new(name).build()
    }

    /// A class whose parent is `parent`.
    pub fn extends(name: impl Into<String>, parent: &Class) -> Self {
        ClassBuilder::new(name).extends(parent).build()
    }

    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// Iterates over strict ancestors, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Class> {
        std::iter::successors(self.parent(), |class| class.parent())
    }

    /// True if `other` is a strict ancestor of this class.
    pub fn inherits_from(&self, other: &Class) -> bool {
        self.ancestors().any(|ancestor| ancestor == other)
    }

    /// True if this class is `other` or inherits from it.
    pub fn is_or_inherits_from(&self, other: &Class) -> bool {
        self == other || self.inherits_from(other)
    }

    /// Looks a method up on this class, then along the parent chain.
    pub fn find_method(&self, name: &str) -> Option<Function> {
        std::iter::once(self)
            .chain(self.ancestors())
            .find_map(|class| class.0.methods.get(name).cloned())
    }

    /// Creates an instance with no own fields.
    pub fn instantiate(&self) -> Instance {
        Instance::new(self)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

/// Builder for [`Class`].
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    parent: Option<Class>,
    methods: IndexMap<String, Function>,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            methods: IndexMap::new(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn extends(mut self, parent: &Class) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Adds a method to the class's method table.
    #[must_use = "builder methods must be chained or built"]
    pub fn method<F>(mut self, name: impl Into<String>, call: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        let name = name.into();
        let func = Function::new(name.as_str(), call);
        self.methods.insert(name, func);
        self
    }

    pub fn build(self) -> Class {
        Class(Arc::new(ClassInner {
            name: self.name,
            parent: self.parent,
            methods: self.methods,
        }))
    }
}

// ============================================================================
// INSTANCE
// ============================================================================

/// An object created from a [`Class`].
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class: Class,
    fields: Map,
}

impl Instance {
    pub fn new(class: &Class) -> Self {
        Self {
            class: class.clone(),
            fields: Map::new(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    pub fn fields(&self) -> &Map {
        &self.fields
    }

    /// True if this instance was created from `class` or one of its subclasses.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.class.is_or_inherits_from(class)
    }
}
