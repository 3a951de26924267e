mod check;
mod completions;
mod generate;
mod list;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use typecat_codegen::GenerateError;

/// Extension trait for exiting on manifest and generation errors with pretty
/// formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for typecat_catalog::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(miette::Report::new(*e)),
        }
    }
}

impl<T> UnwrapOrExit<T> for Result<T, GenerateError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(miette::Report::new(e)),
        }
    }
}

fn exit_with(report: miette::Report) -> ! {
    eprintln!("{:?}", report);
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "typecat")]
#[command(version)]
#[command(about = "Generate typed accessors from a dependency catalog")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the accessor file from typecat.toml
    Generate(GenerateCommand),

    /// Validate typecat.toml without generating code
    Check(CheckCommand),

    /// List aliases and the accessor names derived from them
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
