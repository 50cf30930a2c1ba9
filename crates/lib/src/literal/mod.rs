//! Literal-only reader for the persisted text format.
//!
//! A saved [`Bunch`](crate::Bunch) is a nested literal expression: dicts with
//! string keys, lists, tuples, strings, byte strings, numbers, booleans and
//! `None`. This module reads that text back without evaluating anything; a
//! bare name, an operator or a call is a [`ParseError`].
//!
//! # Usage
//!
//! ```
//! use bunch::literal::{self, Literal};
//!
//! let value = literal::parse("{ 'rate' : 256, 'channels' : ('C3', 'C4'), }")?;
//! assert_eq!(
//!     value.get("rate"),
//!     Some(&Literal::Int(256)),
//! );
//! # Ok::<(), bunch::literal::ParseError>(())
//! ```

use std::{fmt, str::FromStr};

pub mod errors;
pub mod lexer;
pub mod parser;
pub mod repr;

pub use errors::{ErrorContext, ParseError, Span};
pub use repr::{format_float, quote_bytes, quote_str};

/// A plain nested literal value.
///
/// This is the "raw" form of a bunch: the parser produces it and
/// [`Bunch::from_nested`](crate::Bunch::from_nested) converts it, turning every
/// `Dict` into a `Bunch`.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Literal>),
    Tuple(Vec<Literal>),
    /// Key/value pairs in source order
    Dict(Vec<(String, Literal)>),
}

impl Literal {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::None => "NoneType",
            Literal::Bool(_) => "bool",
            Literal::Int(_) => "int",
            Literal::Float(_) => "float",
            Literal::Str(_) => "str",
            Literal::Bytes(_) => "bytes",
            Literal::List(_) => "list",
            Literal::Tuple(_) => "tuple",
            Literal::Dict(_) => "dict",
        }
    }

    /// Looks up `key` in a dict literal; the last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&Literal> {
        match self {
            Literal::Dict(entries) => entries.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => write!(f, "None"),
            Literal::Bool(true) => write!(f, "True"),
            Literal::Bool(false) => write!(f, "False"),
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Float(x) => write!(f, "{}", format_float(*x)),
            Literal::Str(s) => write!(f, "{}", quote_str(s)),
            Literal::Bytes(b) => write!(f, "{}", quote_bytes(b)),
            Literal::List(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            Literal::Tuple(items) => {
                write!(f, "(")?;
                write_joined(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Literal::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {value}", quote_str(key))?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Literal]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl FromStr for Literal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses `source` as one literal expression.
pub fn parse(source: &str) -> Result<Literal, ParseError> {
    let tokens = lexer::tokenize(source)?;
    parser::Parser::new(&tokens).parse()
}
