use clap::Parser;
use miette::Result;
use seal::cli::{Cli, Commands};
use seal::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.verbose);

    match cli.command {
        Commands::Split(args) => {
            seal::cli::split::run(args, &printer)?;
        }
        Commands::Pair(args) => {
            seal::cli::pair::run(args, &printer)?;
        }
        Commands::Batch(args) => {
            seal::cli::batch::run(args, &printer)?;
        }
        Commands::Init(args) => seal::cli::init::run(args, &printer)?,
        Commands::Completions(args) => seal::cli::completions::run(args)?,
    }

    Ok(())
}
