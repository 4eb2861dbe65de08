//! Output format selection.
//!
//! [`OutputFormat`] is parsed case-insensitively from a user-supplied name and
//! [`write_to_format`] dispatches to exactly one writer.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "json-output")]
//! # fn example() -> numpack::Result<()> {
//! use numpack::format::{OutputFormat, write_to_format};
//!
//! let format = OutputFormat::from_name("JSON")?;
//! assert_eq!(format, OutputFormat::Json);
//!
//! write_to_format(&[9, 5, 3, 1], "output.json", format)?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::NumpackError;

/// Output format for a sorted number list.
///
/// - [`Text`](OutputFormat::Text) - comma-joined plain text
/// - [`Json`](OutputFormat::Json) - JSON array
/// - [`Xml`](OutputFormat::Xml) - `<Numbers>` document with one `<Number>` per value
///
/// # Example
///
/// ```rust
/// use numpack::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("Xml").unwrap();
/// assert_eq!(format, OutputFormat::Xml);
/// assert_eq!(format.extension(), "xml");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, numbers separated by `,`
    Text,

    /// JSON array of integers
    Json,

    /// XML document rooted at `Numbers`
    Xml,
}

impl OutputFormat {
    /// Resolves a format name, ignoring case.
    ///
    /// Anything other than `text`, `json` or `xml` (including the empty
    /// string) is rejected with [`NumpackError::UnsupportedFormat`].
    pub fn from_name(name: &str) -> Result<Self, NumpackError> {
        match name.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(NumpackError::unsupported_format(name)),
        }
    }

    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
        }
    }

    /// Returns all available output formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Xml]
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json", "xml"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
            OutputFormat::Xml => "application/xml",
        }
    }

    /// Returns the cargo feature that has to be enabled for this format.
    pub fn required_feature(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Json => Some("json-output"),
            OutputFormat::Xml => Some("xml-output"),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Xml => write!(f, "XML"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = NumpackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::from_name(s)
    }
}

#[cfg(not(all(feature = "json-output", feature = "xml-output")))]
fn missing_feature(format: OutputFormat) -> NumpackError {
    NumpackError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            format.required_feature().unwrap_or("default")
        ),
    )
}

/// Writes numbers to a file in the specified format.
///
/// The numbers are written in the order given; sorting is the caller's job.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    numbers: &[i32],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), NumpackError> {
    match format {
        OutputFormat::Text => crate::output::write_text(numbers, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(numbers, path),
        #[cfg(feature = "xml-output")]
        OutputFormat::Xml => crate::output::write_xml(numbers, path),
        #[cfg(not(all(feature = "json-output", feature = "xml-output")))]
        _ => Err(missing_feature(format)),
    }
}

/// Converts numbers to a string in the specified format.
///
/// Produces exactly the bytes [`write_to_format`] would put on disk.
///
/// ```rust
/// use numpack::format::{OutputFormat, to_format_string};
///
/// let text = to_format_string(&[3, 2, 1], OutputFormat::Text).unwrap();
/// assert_eq!(text, "3,2,1");
/// ```
#[allow(unused_variables)]
pub fn to_format_string(numbers: &[i32], format: OutputFormat) -> Result<String, NumpackError> {
    match format {
        OutputFormat::Text => Ok(crate::output::to_text(numbers)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(numbers),
        #[cfg(feature = "xml-output")]
        OutputFormat::Xml => crate::output::to_xml(numbers),
        #[cfg(not(all(feature = "json-output", feature = "xml-output")))]
        _ => Err(missing_feature(format)),
    }
}
