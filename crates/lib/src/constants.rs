//! Constants used throughout the bunch library.
//!
//! This module provides central definitions for the reserved attribute names,
//! the markers understood by the field-order hint, and the layout constants of
//! the renderer.

/// Prefix that marks a name as a configuration attribute rather than an entry.
pub const RESERVED_PREFIX: char = '_';

/// Separator between the segments of a dotted path.
pub const PATH_SEPARATOR: char = '.';

/// Attribute holding the display-order hint for keys.
pub const FIELD_ORDER: &str = "_fieldOrder";

/// Attribute holding the summarization setting.
pub const SUMMARIZE: &str = "_summarize";

/// Attribute holding the default for sorting keys absent from the field order.
pub const DISPLAY_SORTED: &str = "_display_sorted";

/// Built-in methods reachable by name through [`crate::Bunch::get`].
pub const METHOD_NAMES: [&str; 6] = ["_report", "_copy", "_write", "_read", "_convert", "_set"];

/// Field-order token prefix requesting a blank line before the key.
pub const GROUP_MARKER: &str = "//";

/// Columns added per nesting level when rendering.
pub const INDENT_INCREMENT: usize = 4;

/// Character budget used when summarization is switched on without a limit.
pub const DEFAULT_SUMMARY_LIMIT: usize = 50;
