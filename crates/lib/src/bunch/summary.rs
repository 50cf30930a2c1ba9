//! One-line value summaries.
//!
//! [`summarize`] turns any [`Value`] into a short line of the form
//! `CONTENT APPEND # DESCRIPTOR`, where `CONTENT` is either the value itself
//! (when it is short enough) or `type(...)`, and `DESCRIPTOR` lists identity,
//! size and layout facts. Summaries are for reading only; they are never
//! parsed back.

use ndarray::ArrayD;

use super::value::{Value, qualified};

/// Summarizes `value` within roughly `limit` characters.
///
/// `append_before_comment` is inserted between the content and the `#`
/// descriptor, which is how the renderer places the trailing comma. This
/// never fails.
///
/// # Examples
///
/// ```
/// use bunch::{Value, bunch::summarize};
///
/// assert_eq!(summarize(&Value::Int(5), ",", 50), "5,");
/// assert_eq!(summarize(&Value::from("abc"), ",", 50), "'abc', # length=3");
/// assert_eq!(summarize(&Value::Null, "", 50), "None");
/// ```
pub fn summarize(value: &Value, append_before_comment: &str, limit: usize) -> String {
    match value {
        Value::Null => return format!("None{append_before_comment}"),
        Value::BoundMethod {
            name,
            owner,
            owner_id,
        } => {
            return format!("method {name} of {owner} instance 0x{owner_id:08x}{append_before_comment}");
        }
        Value::Callable { module, name } => {
            return format!("function {}{append_before_comment}", qualified(module, name));
        }
        _ => {}
    }

    let type_name = value.type_name();
    let (size, count) = size_of(value);

    let content = if count <= limit {
        let shown = match value {
            Value::Text(_) | Value::Bytes(_) => value.repr(),
            Value::Array(array) => compact(&array.to_string()),
            _ => compact(&value.repr()),
        };
        let width = shown.chars().count();
        if width <= limit && shows_bare(value) {
            shown
        } else if width + type_name.chars().count() + 2 <= limit {
            format!("{type_name}({shown})")
        } else {
            format!("{type_name}(...)")
        }
    } else {
        format!("{type_name}(...)")
    };

    let identity = value
        .identity()
        .map(|id| format!("id=0x{id:08x}"))
        .unwrap_or_default();
    let (dtype, order) = match value {
        Value::Array(array) => ("dtype=float64".to_string(), memory_order(array)),
        _ => (String::new(), String::new()),
    };

    let descriptor = join_nonempty(&[identity, size, dtype, order], ", ");
    join_nonempty(&[content + append_before_comment, descriptor], " # ")
}

/// Values whose short display text can stand in for the type name.
fn shows_bare(value: &Value) -> bool {
    matches!(
        value,
        Value::Int(_)
            | Value::Float(_)
            | Value::Text(_)
            | Value::Bytes(_)
            | Value::List(_)
            | Value::Tuple(_)
    )
}

/// Size descriptor and element count.
fn size_of(value: &Value) -> (String, usize) {
    if let Value::Array(array) = value {
        let shape = match array.shape() {
            [only] => format!("({only},)"),
            dims => format!(
                "({})",
                dims.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            ),
        };
        return (format!("shape={shape}"), array.len());
    }
    match value.len() {
        Some(len) => (format!("length={len}"), len),
        None => (String::new(), 1),
    }
}

/// Squeezes a display text onto one line, joining whitespace runs with commas.
fn compact(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(",")
        .replace("[,", "[")
        .replace(",]", "]")
        .replace(",,", ",")
}

fn memory_order(array: &ArrayD<f64>) -> String {
    if array.ndim() < 2 {
        String::new()
    } else if !array.is_standard_layout() && array.t().is_standard_layout() {
        "order='F'".to_string()
    } else {
        "order='C'".to_string()
    }
}

fn join_nonempty(parts: &[String], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}
