//! XML output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{NumpackError, Result};

/// Document shape: `<Numbers><Number>..</Number>..</Numbers>`.
#[derive(Serialize)]
#[serde(rename = "Numbers")]
struct XmlNumbers<'a> {
    #[serde(rename = "Number")]
    numbers: &'a [i32],
}

/// Writes numbers to an XML file.
///
/// # Format
/// ```xml
/// <Numbers><Number>9</Number><Number>5</Number></Numbers>
/// ```
/// No XML declaration and no indentation.
pub fn write_xml(numbers: &[i32], output_path: impl AsRef<Path>) -> Result<()> {
    let xml = to_xml(numbers)?;
    let mut file = File::create(output_path)?;
    file.write_all(xml.as_bytes())?;
    Ok(())
}

/// Converts numbers to an XML document string.
///
/// Same format as `write_xml`, but returns a String instead of writing to file.
pub fn to_xml(numbers: &[i32]) -> Result<String> {
    quick_xml::se::to_string(&XmlNumbers { numbers }).map_err(|e| NumpackError::Xml(e.to_string()))
}
