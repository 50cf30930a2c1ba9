//! Attribute-addressable ordered mappings.
//!
//! A [`Bunch`] is an insertion-ordered map from string keys to [`Value`]s
//! whose entries can also be reached through dotted paths such as
//! `"montage.reference.channel"`. Assigning through a path creates any
//! missing intermediate bunches.
//!
//! Names starting with `_` are reserved. They never become entries through
//! [`Bunch::set`]; instead they hold per-node display configuration, set with
//! [`Bunch::configure`]:
//!
//! - `_fieldOrder`: whitespace-separated display order hint. A token starting
//!   with `//` begins a new group, separated by a blank line.
//! - `_summarize`: `false` for full values, `true` or a character limit for
//!   one-line summaries.
//! - `_display_sorted`: sort keys that `_fieldOrder` does not mention.
//!
//! # Usage
//!
//! ```
//! use bunch::Bunch;
//!
//! let mut params = Bunch::new();
//! params.set("rate", 256)?;
//! params.set("filter.low", 0.5)?;
//! params.set("filter.high", 40.0)?;
//!
//! assert_eq!(*params.get("filter.low")?, 0.5);
//! assert_eq!(
//!     params.to_string(),
//!     "{\n    'rate'   : 256,\n    'filter' : \n    {\n        'low'  : 0.5,\n        'high' : 40.0,\n    },\n}"
//! );
//! # Ok::<(), bunch::Error>(())
//! ```
//!
//! # Sharing
//!
//! Nested bunches are reference counted and copied on write. A shallow
//! [`copy`](Bunch::copy) shares nested nodes with its source until either
//! side modifies them; a deep copy shares nothing.

use std::{borrow::Cow, fmt, sync::Arc};

use indexmap::IndexMap;
use tracing::trace;

use crate::constants::{
    DEFAULT_SUMMARY_LIMIT, DISPLAY_SORTED, FIELD_ORDER, METHOD_NAMES, SUMMARIZE,
};
use crate::literal::Literal;

pub mod errors;
pub mod path;
mod persist;
pub mod render;
mod serialize;
pub mod summary;
pub mod value;

pub use errors::BunchError;
pub use path::DottedPath;
pub use render::{RenderOptions, SummaryMode};
pub use summary::summarize;
pub use value::{Value, ValueKind};

/// An ordered mapping with dotted-path access and aligned rendering.
///
/// Equality compares entries only, ignoring order and configuration.
#[derive(Debug, Clone, Default)]
pub struct Bunch {
    entries: IndexMap<String, Value>,
    /// Reserved-prefix configuration, kept apart from the entries
    attributes: IndexMap<String, Value>,
}

impl Bunch {
    /// Creates an empty bunch
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a dict literal, turning every nested dict into a bunch.
    ///
    /// Keys are taken verbatim, so a key containing `.` or starting with `_`
    /// becomes an ordinary entry.
    ///
    /// # Errors
    /// Returns [`BunchError::NotAMapping`] if `literal` is not a dict.
    pub fn from_nested(literal: Literal) -> Result<Self, BunchError> {
        match literal {
            Literal::Dict(entries) => Ok(entries
                .into_iter()
                .map(|(key, value)| (key, Value::from(value)))
                .collect()),
            other => Err(BunchError::NotAMapping {
                found: other.type_name().to_string(),
            }),
        }
    }

    /// Flattens the tree back into a dict literal.
    ///
    /// # Errors
    /// Returns [`BunchError::NotLiteral`] if any value has no literal form.
    pub fn to_nested(&self) -> Result<Literal, BunchError> {
        let entries = self
            .entries
            .iter()
            .map(|(key, value)| Ok((key.clone(), value.to_literal()?)))
            .collect::<Result<_, BunchError>>()?;
        Ok(Literal::Dict(entries))
    }

    /// Number of entries at this level
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `path` names an entry
    pub fn contains_key(&self, path: &str) -> bool {
        self.get_entry(path).is_some()
    }

    /// Resolves a dotted path.
    ///
    /// At each level an entry wins. Otherwise the name may refer to one of the
    /// node's own attributes: a stored configuration value, the default of a
    /// known configuration field, or one of the built-in methods, which
    /// resolves to a [`Value::BoundMethod`].
    ///
    /// # Errors
    /// Returns [`BunchError::InvalidPath`] for malformed paths and
    /// [`BunchError::KeyOrAttributeNotFound`] when a segment resolves to
    /// nothing, including when the path descends into a non-bunch value.
    pub fn get(&self, path: &str) -> Result<Cow<'_, Value>, BunchError> {
        let dotted = DottedPath::parse(path)?;
        let segments = dotted.segments();
        let mut node = self;
        for (depth, segment) in segments.iter().enumerate() {
            let found = node
                .attribute(segment)
                .ok_or_else(|| not_found(path, segment))?;
            let Some(next) = segments.get(depth + 1) else {
                return Ok(found);
            };
            match found {
                Cow::Borrowed(Value::Bunch(child)) => node = child.as_ref(),
                _ => return Err(not_found(path, next)),
            }
        }
        Err(BunchError::InvalidPath {
            path: path.to_string(),
        })
    }

    /// Resolves `path` and converts the value, returning `None` on any failure
    pub fn get_as<'a, T>(&'a self, path: &str) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = BunchError>,
    {
        T::try_from(self.get_entry(path)?).ok()
    }

    /// Gets a mutable reference to an entry by path.
    ///
    /// Only entries are reachable; nested bunches on the way are unshared from
    /// any copies.
    pub fn get_mut(&mut self, path: &str) -> Option<&mut Value> {
        let dotted = DottedPath::parse(path).ok()?;
        let mut node = self;
        for segment in dotted.parents() {
            node = node.entries.get_mut(*segment)?.as_bunch_mut()?;
        }
        node.entries.get_mut(dotted.leaf())
    }

    /// Sets the entry at `path`, returning the previous value.
    ///
    /// Missing intermediate nodes are created as empty bunches.
    ///
    /// # Errors
    /// - [`BunchError::InvalidAssignment`] if the path starts with `_`
    /// - [`BunchError::NotAContainer`] if an intermediate entry is not a bunch
    /// - [`BunchError::InvalidPath`] for malformed paths
    pub fn set(
        &mut self,
        path: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, BunchError> {
        let dotted = DottedPath::parse(path)?;
        if dotted.is_reserved() {
            return Err(BunchError::InvalidAssignment {
                name: path.to_string(),
                reason: "names starting with '_' are configuration, use configure()".to_string(),
            });
        }

        let mut node = self;
        for segment in dotted.parents() {
            let entry = node
                .entries
                .entry((*segment).to_string())
                .or_insert_with(|| {
                    trace!(path, segment, "creating intermediate bunch");
                    Value::from(Bunch::new())
                });
            node = match entry {
                Value::Bunch(child) => Arc::make_mut(child),
                other => {
                    return Err(BunchError::NotAContainer {
                        path: path.to_string(),
                        segment: (*segment).to_string(),
                        found: other.type_name().to_string(),
                    });
                }
            };
        }
        Ok(node.entries.insert(dotted.leaf().to_string(), value.into()))
    }

    /// Stores a configuration attribute on this node.
    ///
    /// # Errors
    /// - [`BunchError::InvalidAssignment`] if `name` does not start with `_`
    ///   or names a built-in method
    /// - [`BunchError::InvalidConfig`] if a known field gets a value of the
    ///   wrong type
    pub fn configure(
        &mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, BunchError> {
        if !path::is_reserved(name) {
            return Err(BunchError::InvalidAssignment {
                name: name.to_string(),
                reason: "configuration names start with '_', use set()".to_string(),
            });
        }
        if METHOD_NAMES.contains(&name) {
            return Err(BunchError::InvalidAssignment {
                name: name.to_string(),
                reason: "built-in methods cannot be replaced".to_string(),
            });
        }
        let value = value.into();
        check_config(name, &value)?;
        Ok(self.attributes.insert(name.to_string(), value))
    }

    /// Applies several assignments, routing reserved names to [`configure`].
    ///
    /// Stops at the first failure; earlier assignments stay applied.
    ///
    /// [`configure`]: Bunch::configure
    pub fn set_all<K, V, I>(&mut self, pairs: I) -> Result<&mut Self, BunchError>
    where
        K: AsRef<str>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in pairs {
            let name = name.as_ref();
            if path::is_reserved(name) {
                self.configure(name, value)?;
            } else {
                self.set(name, value)?;
            }
        }
        Ok(self)
    }

    /// Removes the entry at `path`, keeping the order of the others
    pub fn remove(&mut self, path: &str) -> Option<Value> {
        let dotted = DottedPath::parse(path).ok()?;
        let mut node = self;
        for segment in dotted.parents() {
            node = node.entries.get_mut(*segment)?.as_bunch_mut()?;
        }
        node.entries.shift_remove(dotted.leaf())
    }

    /// Returns a copy of this bunch.
    ///
    /// A deep copy rebuilds every nested bunch. A shallow copy shares nested
    /// bunches with `self` until one side writes to them. The sharing is
    /// copy-on-write rather than by reference: a write through either side,
    /// at any depth, is never visible in the other.
    pub fn copy(&self, deep: bool) -> Self {
        if !deep {
            return self.clone();
        }
        Self {
            entries: deep_copy_map(&self.entries),
            attributes: deep_copy_map(&self.attributes),
        }
    }

    /// Iterates over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// The names offered for completion: the entry keys
    pub fn attribute_names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Iterates over stored configuration attributes
    pub fn configuration(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.attributes.iter()
    }

    /// The `_fieldOrder` hint, if set
    pub fn field_order(&self) -> Option<&str> {
        self.attributes.get(FIELD_ORDER).and_then(Value::as_text)
    }

    /// The summary mode configured by `_summarize`
    pub fn summary_mode(&self) -> SummaryMode {
        match self.attributes.get(SUMMARIZE) {
            Some(Value::Bool(true)) => SummaryMode::Abbreviated(DEFAULT_SUMMARY_LIMIT),
            Some(Value::Int(limit)) if *limit > 0 => match usize::try_from(*limit) {
                Ok(limit) if limit > 1 => SummaryMode::Abbreviated(limit),
                _ => SummaryMode::Abbreviated(DEFAULT_SUMMARY_LIMIT),
            },
            _ => SummaryMode::Full,
        }
    }

    /// The `_display_sorted` setting, `false` unless configured
    pub fn display_sorted(&self) -> bool {
        matches!(self.attributes.get(DISPLAY_SORTED), Some(Value::Bool(true)))
    }

    /// Renders the bunch as an aligned block
    pub fn render(&self, options: &RenderOptions) -> String {
        render::render_bunch(self, options)
    }

    /// Resolves one name against this node only.
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        if let Some(value) = self.entries.get(name) {
            return Some(Cow::Borrowed(value));
        }
        if let Some(value) = self.attributes.get(name) {
            return Some(Cow::Borrowed(value));
        }
        if name == SUMMARIZE || name == DISPLAY_SORTED {
            return Some(Cow::Owned(Value::Bool(false)));
        }
        METHOD_NAMES.contains(&name).then(|| {
            Cow::Owned(Value::BoundMethod {
                name: name.to_string(),
                owner: "Bunch".to_string(),
                owner_id: std::ptr::from_ref(self) as usize,
            })
        })
    }

    /// Follows `path` through entries only.
    fn get_entry(&self, path: &str) -> Option<&Value> {
        let dotted = DottedPath::parse(path).ok()?;
        let mut node = self;
        for segment in dotted.parents() {
            node = node.entries.get(*segment)?.as_bunch()?;
        }
        node.entries.get(dotted.leaf())
    }
}

fn not_found(path: &str, segment: &str) -> BunchError {
    BunchError::KeyOrAttributeNotFound {
        path: path.to_string(),
        segment: segment.to_string(),
    }
}

fn check_config(name: &str, value: &Value) -> Result<(), BunchError> {
    let expected = match (name, value) {
        (FIELD_ORDER, Value::Text(_))
        | (DISPLAY_SORTED, Value::Bool(_))
        | (SUMMARIZE, Value::Bool(_)) => return Ok(()),
        (SUMMARIZE, Value::Int(limit)) if *limit >= 0 => return Ok(()),
        (FIELD_ORDER, _) => "str",
        (DISPLAY_SORTED, _) => "bool",
        (SUMMARIZE, _) => "bool or a non-negative int",
        _ => return Ok(()),
    };
    Err(BunchError::InvalidConfig {
        name: name.to_string(),
        expected: expected.to_string(),
        found: value.type_name().to_string(),
    })
}

fn deep_copy_map(map: &IndexMap<String, Value>) -> IndexMap<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), deep_copy(value)))
        .collect()
}

fn deep_copy(value: &Value) -> Value {
    match value {
        Value::Bunch(bunch) => Value::Bunch(Arc::new(bunch.copy(true))),
        Value::List(items) => Value::List(items.iter().map(deep_copy).collect()),
        Value::Tuple(items) => Value::Tuple(items.iter().map(deep_copy).collect()),
        other => other.clone(),
    }
}

impl PartialEq for Bunch {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Display for Bunch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

/// Collects entries verbatim, like constructing a plain mapping.
///
/// Keys are not split on dots and reserved names are not diverted; later
/// duplicates replace earlier values in place.
impl FromIterator<(String, Value)> for Bunch {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            attributes: IndexMap::new(),
        }
    }
}

// Builder pattern methods
impl Bunch {
    /// Builder method to set a value and return self
    ///
    /// # Errors
    /// Fails like [`Bunch::set`].
    pub fn with(mut self, path: &str, value: impl Into<Value>) -> Result<Self, BunchError> {
        self.set(path, value)?;
        Ok(self)
    }

    /// Builder method to set a configuration attribute
    ///
    /// # Errors
    /// Fails like [`Bunch::configure`].
    pub fn with_config(mut self, name: &str, value: impl Into<Value>) -> Result<Self, BunchError> {
        self.configure(name, value)?;
        Ok(self)
    }
}
