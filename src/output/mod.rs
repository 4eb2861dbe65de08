//! Output format writers.
//!
//! Each format has a string converter and a file writer:
//! - [`to_text`] / [`write_text`] - comma-joined plain text
//! - [`to_json`] / [`write_json`] - compact JSON array - requires `json-output` feature
//! - [`to_xml`] / [`write_xml`] - `<Numbers>` document - requires `xml-output` feature
//!
//! File writers create the file or truncate an existing one.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "json-output", feature = "xml-output"))]
//! # fn main() -> numpack::Result<()> {
//! use numpack::output::{to_text, write_json, write_xml};
//!
//! let numbers = [9, 5, 3, 1];
//!
//! write_json(&numbers, "output.json")?;
//! write_xml(&numbers, "output.xml")?;
//!
//! assert_eq!(to_text(&numbers), "9,5,3,1");
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "json-output", feature = "xml-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;
#[cfg(feature = "xml-output")]
mod xml_writer;

#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};
#[cfg(feature = "xml-output")]
pub use xml_writer::{to_xml, write_xml};
