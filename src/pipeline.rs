//! The sort-and-persist pipeline.
//!
//! Steps, in order: parse the numbers token, sort descending, resolve the
//! format, build the output path, write the file. Every step that can fail
//! runs before the write, so a failed run leaves no file behind.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "json-output")]
//! # fn main() -> numpack::Result<()> {
//! use numpack::config::RunConfig;
//! use numpack::input::RawInput;
//! use numpack::pipeline::Pipeline;
//!
//! let report = Pipeline::new(RunConfig::new()).run(&RawInput::new("5,3,9,1", "json"))?;
//! println!("{}", report.confirmation());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::Result;
use crate::format::{OutputFormat, write_to_format};
use crate::input::{RawInput, parse_numbers};
use crate::processor::sort_descending;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistReport {
    /// Format name exactly as the user supplied it
    pub format: String,
    /// Where the file was written
    pub path: PathBuf,
    /// How many numbers were written
    pub count: usize,
}

impl PersistReport {
    /// The message shown to the user once the file is written.
    pub fn confirmation(&self) -> String {
        format!(
            "Numbers sorted and persisted in {} format at {}",
            self.format,
            self.path.display()
        )
    }
}

/// Runs parse, sort, format selection and persistence with one configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: RunConfig,
}

impl Pipeline {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Sorts the numbers in `input` and writes them in the requested format.
    pub fn run(&self, input: &RawInput) -> Result<PersistReport> {
        let numbers = parse_numbers(&input.numbers)?;
        debug!(count = numbers.len(), "parsed numbers");

        let sorted = sort_descending(numbers);

        let format = OutputFormat::from_name(&input.format)?;
        debug!(%format, "resolved output format");

        let path = self.config.output_path(&input.format);
        write_to_format(&sorted, &path, format)?;
        info!(path = %path.display(), count = sorted.len(), "persisted numbers");

        Ok(PersistReport {
            format: input.format.clone(),
            path,
            count: sorted.len(),
        })
    }
}
