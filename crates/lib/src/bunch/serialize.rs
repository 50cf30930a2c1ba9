//! JSON-friendly serialization.
//!
//! Bunches serialize as maps in display order. Tuples become sequences, byte
//! strings become sequences of integers and arrays become nested sequences.
//! Values without a literal form serialize as their display text.

use ndarray::ArrayViewD;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::render::display_order;
use super::{Bunch, Value};

impl Serialize for Bunch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = display_order(self, self.display_sorted());
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for entry in entries {
            map.serialize_entry(entry.key, entry.value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Bytes(bytes) => serializer.collect_seq(bytes),
            Value::List(items) | Value::Tuple(items) => serializer.collect_seq(items),
            Value::Bunch(bunch) => bunch.serialize(serializer),
            Value::Array(array) => NestedArray(array.view()).serialize(serializer),
            Value::Callable { .. } | Value::BoundMethod { .. } | Value::Opaque { .. } => {
                serializer.serialize_str(&self.repr())
            }
        }
    }
}

/// An array view written as nested sequences, one level per axis.
struct NestedArray<'a>(ArrayViewD<'a, f64>);

impl Serialize for NestedArray<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.ndim() == 0 {
            return match self.0.iter().next() {
                Some(x) => serializer.serialize_f64(*x),
                None => serializer.serialize_unit(),
            };
        }
        serializer.collect_seq(self.0.outer_iter().map(NestedArray))
    }
}
