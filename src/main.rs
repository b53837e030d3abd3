use clap::Parser;
use miette::Result;
use darkicon::cli::{self, Cli, Commands};
use darkicon::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.quiet { Printer::quiet() } else { Printer::new() };
    let settings = || cli::load_settings(cli.config.as_deref());

    match cli.command {
        Commands::Convert(args) => cli::convert::run(args, &settings()?, &printer)?,
        Commands::Preview(args) => cli::preview::run(args, &settings()?, &printer)?,
        Commands::Watch(args) => cli::watch::run(args, &settings()?, &printer)?,
        Commands::Colour(args) => cli::colour::run(args)?,
        Commands::Bands(args) => cli::bands::run(args, &printer)?,
        Commands::Init(args) => cli::init::run(args, &printer)?,
        Commands::Completions(args) => cli::completions::run(args)?,
    }

    Ok(())
}
