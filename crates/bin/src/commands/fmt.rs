use std::fs;

use bunch::RenderOptions;
use tracing::info;

use crate::cli::FmtArgs;

use super::load;

/// Run the fmt command
///
/// Returns whether the file differs from its canonical layout. With
/// `--check` the file is left alone.
pub fn run(args: &FmtArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let current = fs::read_to_string(&args.file)?;
    let canonical = load(&args.file)?.render(&RenderOptions::full());
    let changed = current != canonical;

    if changed && !args.check {
        fs::write(&args.file, &canonical)?;
        info!(file = %args.file.display(), "reformatted");
    } else if changed {
        println!("{} would be reformatted", args.file.display());
    }
    Ok(changed)
}
