//! Run configuration.
//!
//! [`RunConfig`] decides where the output artifact lands. The defaults write
//! `output.<format>` into the current working directory.
//!
//! # Example
//!
//! ```rust
//! use numpack::config::RunConfig;
//! use std::path::PathBuf;
//!
//! let config = RunConfig::new().with_output_dir("exports");
//! assert_eq!(config.output_path("JSON"), PathBuf::from("exports/output.json"));
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default file name stem of the output artifact.
pub const DEFAULT_FILE_STEM: &str = "output";

/// Configuration for a single sort-and-persist run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Directory for the output file (default: none, the working directory)
    pub output_dir: Option<PathBuf>,

    /// File name without extension (default: `output`)
    pub file_stem: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }
}

impl RunConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory the output file is written to.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Sets the file name stem.
    #[must_use]
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    /// Builds the output path for a format token.
    ///
    /// The extension is the token lowercased, so `JSON` gives `output.json`.
    /// Without an output directory the path is relative and bare.
    pub fn output_path(&self, format_token: &str) -> PathBuf {
        let file_name = format!("{}.{}", self.file_stem, format_token.to_lowercase());
        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}
