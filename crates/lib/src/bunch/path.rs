//! Dotted paths for hierarchical bunch access.
//!
//! A path such as `"montage.reference.channel"` names a location in a tree of
//! nested bunches, one segment per level. Segments are taken verbatim: there
//! is no normalization, and an empty segment (`"a..b"`, `".a"`, `""`) is
//! rejected with [`BunchError::InvalidPath`].

use std::fmt;

use super::errors::BunchError;
use crate::constants::{PATH_SEPARATOR, RESERVED_PREFIX};

/// Returns true if `name` starts with the reserved configuration prefix.
pub fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// A validated dotted path borrowed from the caller's string.
///
/// # Examples
///
/// ```
/// use bunch::bunch::path::DottedPath;
///
/// let path = DottedPath::parse("a.b.c")?;
/// assert_eq!(path.segments(), ["a", "b", "c"]);
/// assert_eq!(path.parents(), ["a", "b"]);
/// assert_eq!(path.leaf(), "c");
/// assert!(DottedPath::parse("a..c").is_err());
/// # Ok::<(), bunch::bunch::BunchError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPath<'a> {
    raw: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> DottedPath<'a> {
    /// Splits `raw` on the separator, rejecting empty segments.
    pub fn parse(raw: &'a str) -> Result<Self, BunchError> {
        let segments: Vec<&str> = raw.split(PATH_SEPARATOR).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(BunchError::InvalidPath {
                path: raw.to_string(),
            });
        }
        Ok(Self { raw, segments })
    }

    /// Returns the path as originally written.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// All segments except the last one.
    pub fn parents(&self) -> &[&'a str] {
        match self.segments.split_last() {
            Some((_, parents)) => parents,
            None => &[],
        }
    }

    /// The final segment.
    pub fn leaf(&self) -> &'a str {
        self.segments.last().copied().unwrap_or(self.raw)
    }

    /// Returns true if the path has exactly one segment
    pub fn is_single(&self) -> bool {
        self.segments.len() == 1
    }

    /// Returns true if the path as a whole starts with the reserved prefix.
    ///
    /// Only the leading segment matters: `"a._b"` addresses an ordinary key
    /// named `_b` inside `a`.
    pub fn is_reserved(&self) -> bool {
        is_reserved(self.raw)
    }
}

impl fmt::Display for DottedPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}
