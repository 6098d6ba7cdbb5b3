//! apisurf CLI
//!
//! Command-line interface for apisurf

use apisurf_core::logging_facility::{init, Profile};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "apisurf")]
#[command(about = "apisurf - API surface listing and compatibility checks", long_about = None)]
struct Cli {
    /// Debug logging and the full feature list
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON logs on stderr for CI collectors
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the sorted feature list of a program model
    List(commands::list::ListArgs),
    /// Compare a program model with the recorded baseline
    Check(commands::check::CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init(if cli.json_logs {
        Profile::Production
    } else if cli.verbose {
        Profile::Development
    } else {
        Profile::Quiet
    });

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args, cli.verbose),
        Commands::Check(args) => commands::check::execute(args, cli.verbose),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
