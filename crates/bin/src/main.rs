use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so printed values stay clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bunch=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Show(args) => commands::show::run(args, cli.format)?,
        Commands::Get(args) => commands::get::run(args, cli.format)?,
        Commands::Set(args) => commands::set::run(args)?,
        Commands::Fmt(args) => {
            if commands::fmt::run(args)? && args.check {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
