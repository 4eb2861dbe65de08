//! Unified error types for numpack.
//!
//! Every fallible operation in the library returns [`NumpackError`]. Running
//! with too few input tokens is not an error: the input parser reports it as
//! `None` and the binary prints a usage line instead.

use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// A specialized [`Result`] type for numpack operations.
///
/// # Example
///
/// ```rust
/// use numpack::error::Result;
///
/// fn numbers() -> Result<Vec<i32>> {
///     Ok(vec![3, 2, 1])
/// }
/// ```
pub type Result<T> = std::result::Result<T, NumpackError>;

/// The error type for all numpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NumpackError {
    /// An I/O error occurred.
    ///
    /// Typically the output path is not writable or stdin could not be read.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A piece of the comma-separated list is not a signed 32-bit integer.
    #[error("Invalid number '{token}': {source}")]
    InvalidNumber {
        /// The offending piece, as it appeared in the input
        token: String,
        /// The underlying integer parse error
        #[source]
        source: ParseIntError,
    },

    /// The format name is not one of the supported formats.
    #[error("Unsupported format: '{name}'. Expected one of: text, json, xml")]
    UnsupportedFormat {
        /// The format name as supplied
        name: String,
    },

    /// The format is known but cannot be produced by this build.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was requested
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML serialization error.
    #[cfg(feature = "xml-output")]
    #[error("XML error: {0}")]
    Xml(String),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl NumpackError {
    /// Creates an invalid number error for the given piece.
    pub fn invalid_number(token: impl Into<String>, source: ParseIntError) -> Self {
        NumpackError::InvalidNumber {
            token: token.into(),
            source,
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported_format(name: impl Into<String>) -> Self {
        NumpackError::UnsupportedFormat { name: name.into() }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        NumpackError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, NumpackError::Io(_))
    }

    /// Returns `true` if this is a number parse error.
    pub fn is_invalid_number(&self) -> bool {
        matches!(self, NumpackError::InvalidNumber { .. })
    }

    /// Returns `true` if the format name was not recognized.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, NumpackError::UnsupportedFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
