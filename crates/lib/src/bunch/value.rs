//! Value types stored in a [`Bunch`].
//!
//! [`Value`] is a closed set of variants. Most of them are literals that
//! survive a save/load round trip; the rest (arrays, callables, bound methods
//! and opaque objects) can be stored and summarized but have no literal form.
//!
//! # Direct Comparisons
//!
//! `Value` implements `PartialEq` with primitive types for ergonomic comparisons:
//!
//! ```
//! # use bunch::Value;
//! let text = Value::Text("hello".to_string());
//! let number = Value::Int(42);
//! let flag = Value::Bool(true);
//!
//! assert!(text == "hello");
//! assert!(number == 42);
//! assert!(flag == true);
//! assert!(42 == number);
//! assert!(!(text == 42));
//! ```

use std::{fmt, sync::Arc};

use ndarray::ArrayD;

use super::Bunch;
use super::errors::BunchError;
use super::render::RenderOptions;
use crate::literal::{Literal, format_float, quote_bytes, quote_str};

/// Values that can be stored in a bunch.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // Literal scalars
    /// The absent value, written `None`
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),

    // Literal sequences
    List(Vec<Value>),
    Tuple(Vec<Value>),

    /// Nested bunch, shared copy-on-write between shallow copies
    Bunch(Arc<Bunch>),

    // Non-literal values
    /// N-dimensional numeric array
    Array(ArrayD<f64>),
    /// A free function, identified by its defining module and name
    Callable { module: String, name: String },
    /// A method bound to an owning instance
    BoundMethod {
        name: String,
        owner: String,
        owner_id: usize,
    },
    /// Any other object, carried as its type name and display text
    Opaque { type_name: String, repr: String },
}

/// The formatting capability of a value, as used by the summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Text,
    Sequence,
    ShapedArray,
    Callable,
    BoundMethod,
    Nested,
    Opaque,
}

impl Value {
    /// Classifies the value for summarization.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) => ValueKind::Scalar,
            Value::Text(_) | Value::Bytes(_) => ValueKind::Text,
            Value::List(_) | Value::Tuple(_) => ValueKind::Sequence,
            Value::Bunch(_) => ValueKind::Nested,
            Value::Array(_) => ValueKind::ShapedArray,
            Value::Callable { .. } => ValueKind::Callable,
            Value::BoundMethod { .. } => ValueKind::BoundMethod,
            Value::Opaque { .. } => ValueKind::Opaque,
        }
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Bunch(_) => "Bunch",
            Value::Array(_) => "ndarray",
            Value::Callable { .. } => "function",
            Value::BoundMethod { .. } => "method",
            Value::Opaque { type_name, .. } => type_name,
        }
    }

    /// Returns true if the value (and everything inside it) has a literal form
    pub fn is_literal(&self) -> bool {
        match self {
            Value::List(items) | Value::Tuple(items) => items.iter().all(Value::is_literal),
            Value::Bunch(bunch) => bunch.values().all(Value::is_literal),
            Value::Array(_)
            | Value::Callable { .. }
            | Value::BoundMethod { .. }
            | Value::Opaque { .. } => false,
            _ => true,
        }
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a nested bunch
    pub fn is_bunch(&self) -> bool {
        matches!(self, Value::Bunch(_))
    }

    /// Number of elements for values with a length.
    ///
    /// Text counts characters. Arrays report their extent through the shape
    /// instead and return `None` here.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Text(s) => Some(s.chars().count()),
            Value::Bytes(b) => Some(b.len()),
            Value::List(items) | Value::Tuple(items) => Some(items.len()),
            Value::Bunch(bunch) => Some(bunch.len()),
            _ => None,
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float; integers widen
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            #[allow(clippy::cast_precision_loss)]
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to view the value as a nested bunch
    pub fn as_bunch(&self) -> Option<&Bunch> {
        match self {
            Value::Bunch(bunch) => Some(bunch),
            _ => None,
        }
    }

    /// Mutable access to a nested bunch, unsharing it first if needed
    pub fn as_bunch_mut(&mut self) -> Option<&mut Bunch> {
        match self {
            Value::Bunch(bunch) => Some(Arc::make_mut(bunch)),
            _ => None,
        }
    }

    /// Returns an identity token for reference-like values.
    ///
    /// Lists, bunches, arrays and opaque objects have one; scalars, strings,
    /// byte strings and tuples are compared by value and have none. The token
    /// is an address, stable for as long as the value is neither moved nor
    /// reallocated. Lists and empty arrays use the address of the `Value`
    /// itself, since every empty buffer shares one dangling pointer.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::Bunch(bunch) => Some(Arc::as_ptr(bunch) as usize),
            Value::Array(array) if !array.is_empty() => Some(array.as_ptr() as usize),
            Value::List(_) | Value::Array(_) | Value::Opaque { .. } => {
                Some(std::ptr::from_ref(self) as usize)
            }
            _ => None,
        }
    }

    /// Full textual representation.
    ///
    /// Literal values produce text the literal parser reads back; nested
    /// bunches use the multi-line renderer with their own settings.
    pub fn repr(&self) -> String {
        match self {
            Value::Null => "None".to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(x) => format_float(*x),
            Value::Text(s) => quote_str(s),
            Value::Bytes(b) => quote_bytes(b),
            Value::List(items) => format!("[{}]", join_reprs(items)),
            Value::Tuple(items) if items.len() == 1 => format!("({},)", join_reprs(items)),
            Value::Tuple(items) => format!("({})", join_reprs(items)),
            Value::Bunch(bunch) => bunch.render(&RenderOptions::default()),
            Value::Array(array) => {
                // Continuation lines line up under the opening bracket
                let body = array.to_string().replace('\n', "\n      ");
                format!("array({body})")
            }
            Value::Callable { module, name } => format!("<function {}>", qualified(module, name)),
            Value::BoundMethod {
                name,
                owner,
                owner_id,
            } => format!("<bound method {owner}.{name} of {owner} instance 0x{owner_id:08x}>"),
            Value::Opaque { repr, .. } => repr.clone(),
        }
    }

    /// Converts to a plain literal.
    ///
    /// # Errors
    /// Returns [`BunchError::NotLiteral`] for arrays, callables, bound methods
    /// and opaque values, wherever they occur in the tree.
    pub fn to_literal(&self) -> Result<Literal, BunchError> {
        Ok(match self {
            Value::Null => Literal::None,
            Value::Bool(b) => Literal::Bool(*b),
            Value::Int(n) => Literal::Int(*n),
            Value::Float(x) => Literal::Float(*x),
            Value::Text(s) => Literal::Str(s.clone()),
            Value::Bytes(b) => Literal::Bytes(b.clone()),
            Value::List(items) => Literal::List(to_literals(items)?),
            Value::Tuple(items) => Literal::Tuple(to_literals(items)?),
            Value::Bunch(bunch) => bunch.to_nested()?,
            other => {
                return Err(BunchError::NotLiteral {
                    type_name: other.type_name().to_string(),
                });
            }
        })
    }
}

fn join_reprs(items: &[Value]) -> String {
    items.iter().map(Value::repr).collect::<Vec<_>>().join(", ")
}

fn to_literals(items: &[Value]) -> Result<Vec<Literal>, BunchError> {
    items.iter().map(Value::to_literal).collect()
}

/// Joins a module and a name, skipping an empty module.
pub(crate) fn qualified(module: &str, name: &str) -> String {
    [module, name]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

/// Dicts become bunches at every depth, including inside lists and tuples.
impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::None => Value::Null,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Int(n) => Value::Int(n),
            Literal::Float(x) => Value::Float(x),
            Literal::Str(s) => Value::Text(s),
            Literal::Bytes(b) => Value::Bytes(b),
            Literal::List(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Literal::Tuple(items) => Value::Tuple(items.into_iter().map(Value::from).collect()),
            Literal::Dict(entries) => Value::Bunch(Arc::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            )),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Bunch> for Value {
    fn from(value: Bunch) -> Self {
        Value::Bunch(Arc::new(value))
    }
}

impl From<Arc<Bunch>> for Value {
    fn from(value: Arc<Bunch>) -> Self {
        Value::Bunch(value)
    }
}

impl From<ArrayD<f64>> for Value {
    fn from(value: ArrayD<f64>) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

fn mismatch(expected: &str, value: &Value) -> BunchError {
    BunchError::TypeMismatch {
        expected: expected.to_string(),
        found: value.type_name().to_string(),
    }
}

// TryFrom implementations for typed retrieval
impl TryFrom<&Value> for i64 {
    type Error = BunchError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| mismatch("int", value))
    }
}

impl TryFrom<&Value> for f64 {
    type Error = BunchError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_float().ok_or_else(|| mismatch("float", value))
    }
}

impl TryFrom<&Value> for bool {
    type Error = BunchError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = BunchError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_text().ok_or_else(|| mismatch("str", value))
    }
}

impl TryFrom<&Value> for String {
    type Error = BunchError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| mismatch("str", value))
    }
}

impl<'a> TryFrom<&'a Value> for &'a Bunch {
    type Error = BunchError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_bunch().ok_or_else(|| mismatch("Bunch", value))
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(i64::from(*other))
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(x) if x == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
