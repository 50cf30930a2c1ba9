//!
//! Bunch: attribute-addressable ordered mappings with an aligned pretty-printer.
//!
//! This library stores nested parameter and result sets in a form that is easy
//! to read, diff and reload.
//!
//! ## Core Concepts
//!
//! * **Bunches (`bunch::Bunch`)**: insertion-ordered maps whose entries are reachable through dotted paths (`"filter.low"`). Assigning through a path creates missing intermediate bunches.
//! * **Values (`bunch::Value`)**: the closed set of things a bunch can hold. Literal values (numbers, strings, bytes, lists, tuples, nested bunches) survive a save/load round trip; arrays, callables and opaque objects can be shown but not saved.
//! * **Rendering (`bunch::render`)**: a deterministic, column-aligned layout driven by per-node configuration (`_fieldOrder`, `_summarize`, `_display_sorted`).
//! * **Summaries (`bunch::summary`)**: one-line, lossy descriptions of values for quick inspection.
//! * **Literals (`literal`)**: a literal-only reader for the saved text format. Nothing in a file is ever evaluated.

pub mod bunch;
pub mod constants;
pub mod literal;

/// Re-export the core types for easier access.
pub use bunch::{Bunch, BunchError, RenderOptions, SummaryMode, Value};
pub use literal::ParseError;

/// Result type used throughout the bunch library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the bunch library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured errors from the bunch module
    #[error(transparent)]
    Bunch(bunch::BunchError),

    /// Structured errors from the literal parser
    #[error(transparent)]
    Parse(literal::ParseError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Bunch(_) => "bunch",
            Error::Parse(_) => "literal",
            Error::Io(_) => "io",
        }
    }

    /// Check if this error indicates a key or attribute was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Bunch(bunch_err) => bunch_err.is_not_found(),
            Error::Io(io_err) => io_err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error comes from reading literal text.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error is a rejected assignment.
    pub fn is_invalid_assignment(&self) -> bool {
        match self {
            Error::Bunch(bunch_err) => bunch_err.is_invalid_assignment(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Bunch(bunch_err) => bunch_err.is_type_error(),
            _ => false,
        }
    }
}

// Conversion from ParseError to the main Error type
impl From<literal::ParseError> for Error {
    fn from(err: literal::ParseError) -> Self {
        Error::Parse(err)
    }
}
