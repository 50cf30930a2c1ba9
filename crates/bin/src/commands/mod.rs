//! Subcommand implementations.

pub mod fmt;
pub mod get;
pub mod set;
pub mod show;

use std::{fs, path::Path};

use bunch::Bunch;

/// Reads a bunch file, pointing parse errors at the offending text.
pub(crate) fn load(path: &Path) -> Result<Bunch, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
    text.parse::<Bunch>().map_err(|err| match err {
        bunch::Error::Parse(parse) => {
            format!("{}: {}", path.display(), parse.context(&text)).into()
        }
        other => other.into(),
    })
}
