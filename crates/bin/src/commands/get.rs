use bunch::{SummaryMode, Value, bunch::summarize};

use crate::cli::GetArgs;
use crate::output::{OutputFormat, render_options};

use super::load;

/// Run the get command
pub fn run(args: &GetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let bunch = load(&args.file)?;
    let value = bunch.get(&args.path)?;
    println!("{}", display(&value, args, format)?);
    Ok(())
}

fn display(
    value: &Value,
    args: &GetArgs,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string(value)?);
    }
    let options = render_options(&args.display);
    Ok(match (value, options.summarize) {
        (Value::Bunch(inner), _) => inner.render(&options),
        (_, Some(SummaryMode::Abbreviated(limit))) => summarize(value, "", limit),
        _ => value.repr(),
    })
}
