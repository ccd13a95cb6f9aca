use clap::{Parser, Subcommand};

mod check;
mod symbols;

pub fn exec() -> Result<(), Vec<miette::Report>> {
    use Command::*;
    let cli = Cli::parse();
    match cli.command {
        Check(args) => check::exec(args),
        Symbols(args) => symbols::exec(args),
    }
}

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the definitions, scopes and return statements of a syntax tree
    Check(check::Args),
    /// List the global definitions of a syntax tree
    Symbols(symbols::Args),
}
