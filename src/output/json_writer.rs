//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Writes numbers to a JSON file as an array.
///
/// # Format
/// ```json
/// [9,5,3,1]
/// ```
pub fn write_json(numbers: &[i32], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(numbers)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts numbers to a compact JSON array string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(numbers: &[i32]) -> Result<String> {
    Ok(serde_json::to_string(numbers)?)
}
