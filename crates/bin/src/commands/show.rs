use bunch::{Bunch, constants::FIELD_ORDER};

use crate::cli::ShowArgs;
use crate::output::{OutputFormat, render_options};

use super::load;

/// Run the show command
pub fn run(args: &ShowArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let bunch = prepare(args)?;
    println!("{}", display(&bunch, args, format)?);
    Ok(())
}

/// Loads the file and applies the command-line field order.
fn prepare(args: &ShowArgs) -> Result<Bunch, Box<dyn std::error::Error>> {
    let mut bunch = load(&args.file)?;
    if let Some(order) = &args.field_order {
        bunch.configure(FIELD_ORDER, order.as_str())?;
    }
    Ok(bunch)
}

fn display(
    bunch: &Bunch,
    args: &ShowArgs,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        OutputFormat::Human => bunch.render(&render_options(&args.display)),
        OutputFormat::Json => serde_json::to_string_pretty(bunch)?,
    })
}
