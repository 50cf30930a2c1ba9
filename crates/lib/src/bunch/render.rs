//! Column-aligned rendering of bunches.
//!
//! A rendered bunch is a brace-delimited block with one `'key' : value,` line
//! per entry. Within a block every ` : ` separator lines up in one column, and
//! nested blocks continue that alignment four columns further right. Display
//! order comes from the node's `_fieldOrder` hint, followed by the remaining
//! keys in insertion (or sorted) order.
//!
//! With summarization off the output is a valid literal and reads back into
//! an equal bunch.

use std::collections::HashSet;

use super::Bunch;
use super::summary::summarize;
use super::value::Value;
use crate::constants::{DEFAULT_SUMMARY_LIMIT, GROUP_MARKER, INDENT_INCREMENT};
use crate::literal::quote_str;

/// How leaf values are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    /// Full literal representation
    Full,
    /// One-line summaries of about this many characters
    Abbreviated(usize),
}

impl SummaryMode {
    /// Returns true if values are summarized rather than printed in full
    pub fn is_abbreviated(&self) -> bool {
        matches!(self, SummaryMode::Abbreviated(_))
    }
}

/// Per-call rendering options.
///
/// Fields left as `None` fall back to the configuration of each node being
/// rendered. A summary mode that is resolved at one node is handed down to
/// every nested node; the sorting choice is handed down unresolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Columns before the opening brace
    pub indent: usize,
    /// Column the separator should reach at least, plus one indent step
    pub min_colon_position: usize,
    /// Sort keys that `_fieldOrder` does not mention
    pub sort_unknown_keys: Option<bool>,
    pub summarize: Option<SummaryMode>,
}

impl RenderOptions {
    /// Full-fidelity rendering regardless of node configuration.
    pub fn full() -> Self {
        Self {
            summarize: Some(SummaryMode::Full),
            ..Self::default()
        }
    }

    /// Summarized rendering with the given character limit.
    pub fn summarized(limit: usize) -> Self {
        Self {
            summarize: Some(SummaryMode::Abbreviated(limit)),
            ..Self::default()
        }
    }

    /// Builder method to choose the ordering of unlisted keys
    pub fn with_sorted_keys(mut self, sorted: bool) -> Self {
        self.sort_unknown_keys = Some(sorted);
        self
    }
}

/// One line of output: the `_fieldOrder` token (marker included) and the entry.
pub(super) struct DisplayEntry<'a> {
    token: &'a str,
    pub(super) key: &'a str,
    pub(super) value: &'a Value,
}

impl DisplayEntry<'_> {
    fn starts_group(&self) -> bool {
        self.token.starts_with(GROUP_MARKER)
    }
}

/// Listed keys first, in hint order, then the rest.
pub(super) fn display_order(bunch: &Bunch, sort_unknown: bool) -> Vec<DisplayEntry<'_>> {
    let mut listed = HashSet::new();
    let mut order = Vec::with_capacity(bunch.len());

    for token in bunch.field_order().unwrap_or_default().split_whitespace() {
        let key = token.strip_prefix(GROUP_MARKER).unwrap_or(token);
        let Some((key, value)) = bunch.entries.get_key_value(key) else {
            continue;
        };
        if listed.insert(key.as_str()) {
            order.push(DisplayEntry { token, key, value });
        }
    }

    let mut unknown: Vec<_> = bunch
        .entries
        .iter()
        .filter(|(key, _)| !listed.contains(key.as_str()))
        .map(|(key, value)| DisplayEntry {
            token: key,
            key,
            value,
        })
        .collect();
    if sort_unknown {
        unknown.sort_by(|a, b| a.key.cmp(b.key));
    }
    order.extend(unknown);
    order
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(out: &mut String, columns: usize) {
    out.extend(std::iter::repeat_n(' ', columns));
}

pub(crate) fn render_bunch(bunch: &Bunch, options: &RenderOptions) -> String {
    let indent = options.indent;
    let lead = indent + INDENT_INCREMENT;
    let sort_unknown = options
        .sort_unknown_keys
        .unwrap_or_else(|| bunch.display_sorted());
    let mode = options.summarize.unwrap_or_else(|| bunch.summary_mode());

    let entries = display_order(bunch, sort_unknown);
    let widest = entries
        .iter()
        .map(|entry| width(&quote_str(entry.token)))
        .max()
        .unwrap_or(0);
    let colon = options
        .min_colon_position
        .saturating_sub(INDENT_INCREMENT)
        .max(widest + lead + 1);

    let mut out = String::new();
    pad(&mut out, indent);
    out.push_str("{\n");

    for entry in &entries {
        if entry.starts_group() {
            out.push('\n');
        }
        let quoted = quote_str(entry.key);
        pad(&mut out, lead);
        out.push_str(&quoted);
        pad(&mut out, colon.saturating_sub(width(&quoted) + 1 + lead));
        out.push_str(" : ");

        match (entry.value, mode) {
            (Value::Bunch(nested), _) => {
                let child = RenderOptions {
                    indent: lead,
                    min_colon_position: colon + INDENT_INCREMENT,
                    sort_unknown_keys: options.sort_unknown_keys,
                    summarize: Some(mode),
                };
                out.push('\n');
                out.push_str(render_bunch(nested, &child).trim_end());
                out.push(',');
            }
            (value, SummaryMode::Abbreviated(limit)) => {
                let limit = if limit > 1 { limit } else { DEFAULT_SUMMARY_LIMIT };
                out.push_str(&summarize(value, ",", limit));
            }
            (value, SummaryMode::Full) => {
                let repr = value.repr();
                let repr = repr.trim();
                if repr.contains('\n') {
                    let mut continuation = String::from("\n");
                    pad(&mut continuation, lead + INDENT_INCREMENT);
                    out.push_str(&format!("\n{repr}").replace('\n', &continuation));
                } else {
                    out.push_str(repr);
                }
                out.push(',');
            }
        }
        out.push('\n');
    }

    pad(&mut out, indent);
    out.push('}');
    out
}
