//! CLI argument definitions for the bunch binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Inspect and edit saved bunch files
#[derive(Parser, Debug)]
#[command(name = "bunch")]
#[command(about = "Bunch: inspect and edit aligned literal parameter files")]
#[command(version)]
pub struct Cli {
    /// Output format for commands that print data
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human, env = "BUNCH_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a saved bunch
    Show(ShowArgs),
    /// Print one value by dotted path
    Get(GetArgs),
    /// Assign a literal value at a dotted path and save
    Set(SetArgs),
    /// Rewrite a file in canonical layout
    Fmt(FmtArgs),
}

/// Display settings shared by the printing commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Summarize values in about this many characters (0 prints values in full)
    #[arg(short, long, env = "BUNCH_SUMMARIZE")]
    pub summarize: Option<usize>,

    /// Sort keys not named by the field order
    #[arg(long, env = "BUNCH_SORT_KEYS")]
    pub sort_keys: bool,
}

/// Arguments for the show command
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// File to read
    pub file: PathBuf,

    #[command(flatten)]
    pub display: DisplayArgs,

    /// Display order hint for top-level keys, e.g. "name rate //filter"
    #[arg(long, env = "BUNCH_FIELD_ORDER")]
    pub field_order: Option<String>,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// File to read
    pub file: PathBuf,

    /// Dotted path of the value, e.g. "filter.low"
    pub path: String,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// File to update; created if missing
    pub file: PathBuf,

    /// Dotted path to assign, e.g. "filter.low"
    pub path: String,

    /// Value as a literal, e.g. "0.5", "'Cz'" or "(1, 30)"
    pub literal: String,
}

/// Arguments for the fmt command
#[derive(clap::Args, Debug)]
pub struct FmtArgs {
    /// File to rewrite
    pub file: PathBuf,

    /// Only report whether the file would change
    #[arg(long)]
    pub check: bool,
}
