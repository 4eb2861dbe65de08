//! Plain text output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Separator placed between numbers.
const SEPARATOR: &str = ",";

/// Writes numbers as comma-separated text.
///
/// # Format
/// ```text
/// 9,5,3,1
/// ```
/// No spaces and no trailing newline.
pub fn write_text(numbers: &[i32], output_path: impl AsRef<Path>) -> Result<()> {
    let text = to_text(numbers);
    let mut file = File::create(output_path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

/// Converts numbers to comma-separated text.
///
/// Same format as `write_text`, but returns a String instead of writing to file.
pub fn to_text(numbers: &[i32]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
