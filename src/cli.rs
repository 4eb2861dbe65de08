//! Command-line interface definition using clap.
//!
//! Positional arguments are collected as raw tokens so that the two-or-more
//! rule of [`RawInput::from_args`] decides between direct and interactive
//! input, not clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::RunConfig;
use crate::input::RawInput;

/// Sort integers in descending order and save them as text, JSON or XML.
#[derive(Parser, Debug, Clone)]
#[command(name = "numpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    numpack 5,3,9,1 text
    numpack -4,12,7 JSON
    numpack 5,3,9,1 xml --output-dir exports
    numpack                 (prompts for \"<numbers> <format>\")")]
pub struct Args {
    /// Comma-separated numbers followed by the format (text, json, xml)
    #[arg(value_name = "NUMBERS FORMAT", allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Directory to write the output file to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Log pipeline steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Numbers and format from the positional arguments, if at least two were given.
    pub fn raw_input(&self) -> Option<RawInput> {
        RawInput::from_args(self.tokens.as_slice())
    }

    /// Run configuration built from the flags.
    pub fn run_config(&self) -> RunConfig {
        match &self.output_dir {
            Some(dir) => RunConfig::new().with_output_dir(dir),
            None => RunConfig::new(),
        }
    }
}
