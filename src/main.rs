//! # numpack CLI
//!
//! Command-line interface for the numpack library.

use std::io;
use std::process;

use clap::Parser as ClapParser;

use numpack::cli::Args;
use numpack::input::{RawInput, read_interactive};
use numpack::logging;
use numpack::pipeline::Pipeline;
use numpack::NumpackError;

const USAGE: &str = "Usage: numpack <numbers> <format>";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), NumpackError> {
    let args = <Args as ClapParser>::parse();
    logging::init(args.verbose);

    let Some(raw) = obtain_input(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let report = Pipeline::new(args.run_config()).run(&raw)?;
    println!("{}", report.confirmation());

    Ok(())
}

/// Positional arguments when there are at least two, otherwise one prompted line.
fn obtain_input(args: &Args) -> Result<Option<RawInput>, NumpackError> {
    if let Some(raw) = args.raw_input() {
        return Ok(Some(raw));
    }

    tracing::debug!(tokens = args.tokens.len(), "too few arguments, prompting");
    read_interactive(io::stdin().lock(), io::stdout().lock())
}
