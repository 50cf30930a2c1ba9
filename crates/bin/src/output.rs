//! Output formatting helpers for human-readable and JSON output.

use bunch::{RenderOptions, SummaryMode, constants::DEFAULT_SUMMARY_LIMIT};

use crate::cli::DisplayArgs;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Rendering options for the display flags.
///
/// Unset flags leave the decision to each node's own configuration. A limit
/// of 1 falls back to the default limit, as `_summarize = 1` does.
pub fn render_options(display: &DisplayArgs) -> RenderOptions {
    RenderOptions {
        sort_unknown_keys: display.sort_keys.then_some(true),
        summarize: display.summarize.map(|limit| match limit {
            0 => SummaryMode::Full,
            1 => SummaryMode::Abbreviated(DEFAULT_SUMMARY_LIMIT),
            limit => SummaryMode::Abbreviated(limit),
        }),
        ..RenderOptions::default()
    }
}
