use bunch::{Bunch, Value, literal};
use tracing::info;

use crate::cli::SetArgs;

use super::load;

/// Run the set command
pub fn run(args: &SetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut bunch = if args.file.exists() {
        load(&args.file)?
    } else {
        Bunch::new()
    };

    let parsed = literal::parse(&args.literal)
        .map_err(|err| format!("invalid literal: {}", err.context(&args.literal)))?;
    bunch.set(&args.path, Value::from(parsed))?;
    bunch.write(&args.file)?;

    info!(file = %args.file.display(), path = %args.path, "value saved");
    Ok(())
}
