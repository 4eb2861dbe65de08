//! # numpack
//!
//! Sorts a list of integers in descending order and persists it as plain
//! text, JSON, or XML.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use numpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let numbers = sort_descending(parse_numbers("5,3,9,1")?);
//!     let format = OutputFormat::from_name("text")?;
//!
//!     write_to_format(&numbers, "output.text", format)?;
//!     Ok(())
//! }
//! ```
//!
//! Or run the whole pipeline, which also derives the output path:
//!
//! ```rust,no_run
//! use numpack::prelude::*;
//!
//! let report = Pipeline::new(RunConfig::new()).run(&RawInput::new("5,3,9,1", "xml"))?;
//! assert_eq!(report.path, std::path::PathBuf::from("output.xml"));
//! # Ok::<(), numpack::NumpackError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`input`] — [`RawInput`](input::RawInput), [`parse_numbers`](input::parse_numbers), interactive prompt
//! - [`processor`] — [`sort_descending`](processor::sort_descending)
//! - [`format`] — [`OutputFormat`](format::OutputFormat), [`write_to_format`](format::write_to_format)
//! - [`output`] — per-format writers (`write_text`, `write_json`, `write_xml`)
//! - [`pipeline`] — [`Pipeline`](pipeline::Pipeline) and its [`PersistReport`](pipeline::PersistReport)
//! - [`config`] — [`RunConfig`](config::RunConfig)
//! - [`logging`] — `tracing` subscriber setup
//! - [`cli`] — clap argument definition (requires `cli` feature)
//! - [`error`] — [`NumpackError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod processor;

// Re-export the main types at the crate root for convenience
pub use error::{NumpackError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use numpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{NumpackError, Result};

    pub use crate::config::RunConfig;
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::input::{RawInput, parse_numbers};
    pub use crate::pipeline::{PersistReport, Pipeline};
    pub use crate::processor::sort_descending;
}
