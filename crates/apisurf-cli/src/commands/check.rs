//! Check command

use apisurf_core::diff::{render_human_summary, render_report};
use apisurf_engine::{check_api, CheckOptions, CheckOutcome};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON semantic model of the program
    #[arg(long)]
    pub model: PathBuf,

    /// Program root holding the `api/` baseline files
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (defaults to `<root>/apisurf.toml`)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: CheckArgs, verbose: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let options = CheckOptions {
        model: args.model,
        root: args.root,
        config: args.config,
        verbose,
    };
    let report = check_api(&options)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if verbose {
        for feature in &report.features {
            writeln!(out, "{}", feature)?;
        }
    }

    match report.outcome {
        CheckOutcome::Compatible => Ok(ExitCode::SUCCESS),
        CheckOutcome::DatabaseProblems(problems) => {
            for problem in problems.problems() {
                eprintln!("{}", problem);
            }
            eprintln!("API database problems found");
            Ok(ExitCode::FAILURE)
        }
        CheckOutcome::Differences(diff) => {
            out.write_all(render_report(&diff).as_bytes())?;
            out.flush()?;
            if verbose {
                eprint!("{}", render_human_summary(&diff));
            }
            eprintln!("API differences found");
            Ok(ExitCode::FAILURE)
        }
    }
}
