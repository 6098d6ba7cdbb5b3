//! List command

use apisurf_engine::{list_features, ListOptions};
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// JSON semantic model of the program
    #[arg(long)]
    pub model: PathBuf,

    /// Print the SHA-256 digest of the surface instead of the features
    #[arg(long)]
    pub digest: bool,

    /// Include packages under an `internal` path segment
    #[arg(long)]
    pub include_internal: bool,
}

pub fn execute(args: ListArgs, verbose: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut options = ListOptions::new(args.model);
    options.skip_internal = !args.include_internal;
    options.verbose = verbose;

    let result = list_features(&options)?;
    if args.digest {
        println!("{}", result.digest);
    } else {
        for feature in &result.features {
            println!("{}", feature);
        }
    }
    Ok(ExitCode::SUCCESS)
}
