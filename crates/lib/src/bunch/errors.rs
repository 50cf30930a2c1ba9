//! Error types for bunch operations.
//!
//! This module defines structured error types for path resolution, reserved
//! attribute handling and conversions between bunches and plain literals.

use thiserror::Error;

/// Structured error types for bunch operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BunchError {
    /// A path segment is neither a key nor a built-in attribute
    #[error("'{path}': no key or attribute named '{segment}'")]
    KeyOrAttributeNotFound { path: String, segment: String },

    /// A reserved-prefix name went through the entry setter, or a plain name
    /// through the configuration setter
    #[error("cannot assign '{name}': {reason}")]
    InvalidAssignment { name: String, reason: String },

    /// An assignment needed to descend through a value that is not a bunch
    #[error("'{path}': segment '{segment}' holds a {found}, not a Bunch")]
    NotAContainer {
        path: String,
        segment: String,
        found: String,
    },

    /// The path is empty or has an empty segment
    #[error("invalid path '{path}'")]
    InvalidPath { path: String },

    /// A known configuration attribute was given a value of the wrong type
    #[error("invalid value for '{name}': expected {expected}, found {found}")]
    InvalidConfig {
        name: String,
        expected: String,
        found: String,
    },

    /// A literal that should describe a bunch is not a mapping
    #[error("expected a mapping literal, found {found}")]
    NotAMapping { found: String },

    /// A value has no literal form
    #[error("value of type {type_name} has no literal form")]
    NotLiteral { type_name: String },

    /// A typed accessor found a value of another type
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
}

impl BunchError {
    /// Check if this error is a failed lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, BunchError::KeyOrAttributeNotFound { .. })
    }

    /// Check if this error is a rejected assignment
    pub fn is_invalid_assignment(&self) -> bool {
        matches!(self, BunchError::InvalidAssignment { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            BunchError::TypeMismatch { .. } | BunchError::InvalidConfig { .. }
        )
    }

    /// Check if this error comes from walking a path
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            BunchError::KeyOrAttributeNotFound { .. }
                | BunchError::NotAContainer { .. }
                | BunchError::InvalidPath { .. }
        )
    }

    /// Check if this error comes from converting to or from literals
    pub fn is_conversion_error(&self) -> bool {
        matches!(
            self,
            BunchError::NotAMapping { .. } | BunchError::NotLiteral { .. }
        )
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            BunchError::KeyOrAttributeNotFound { path, .. }
            | BunchError::NotAContainer { path, .. }
            | BunchError::InvalidPath { path } => Some(path),
            _ => None,
        }
    }
}

// Conversion from BunchError to the main Error type
impl From<BunchError> for crate::Error {
    fn from(err: BunchError) -> Self {
        crate::Error::Bunch(err)
    }
}
