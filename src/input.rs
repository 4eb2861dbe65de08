//! Input parsing.
//!
//! Input arrives either as positional arguments or as one line typed at an
//! interactive prompt. Both are reduced to a [`RawInput`]: the numbers token
//! and the format token. [`parse_numbers`] then turns the numbers token into
//! integers.
//!
//! # Example
//!
//! ```rust
//! use numpack::input::{RawInput, parse_numbers};
//!
//! let raw = RawInput::from_line("5,3,9,1 json").unwrap();
//! assert_eq!(raw.format, "json");
//! assert_eq!(parse_numbers(&raw.numbers).unwrap(), vec![5, 3, 9, 1]);
//! ```

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::error::{NumpackError, Result};

/// Text shown before reading an interactive line.
pub const PROMPT: &str = "Enter numbers separated by commas:";

/// Separator between numbers inside the numbers token.
const NUMBER_SEPARATOR: char = ',';

/// Separator between tokens on an interactive line.
const TOKEN_SEPARATOR: char = ' ';

/// The two tokens a run needs, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    /// Comma-separated numbers, e.g. `5,3,9,1`
    pub numbers: String,

    /// Format name exactly as supplied, e.g. `JSON`
    pub format: String,
}

impl RawInput {
    /// Creates a new input from its two tokens.
    pub fn new(numbers: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            numbers: numbers.into(),
            format: format.into(),
        }
    }

    /// Takes the first two arguments as numbers and format.
    ///
    /// Extra arguments are ignored. Returns `None` with fewer than two.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Option<Self> {
        match args {
            [numbers, format, ..] => Some(Self::new(numbers.as_ref(), format.as_ref())),
            _ => None,
        }
    }

    /// Splits an interactive line on single spaces and takes the first two tokens.
    ///
    /// Consecutive spaces produce empty tokens, so `"1,2  json"` reads an
    /// empty format. Returns `None` with fewer than two tokens.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\n', '\r']);
        let tokens: Vec<&str> = line.split(TOKEN_SEPARATOR).collect();
        Self::from_args(tokens.as_slice())
    }
}

/// Prompts on `writer` and reads one line from `reader`.
///
/// End of input counts as an empty line, which yields `None`.
pub fn read_interactive<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<Option<RawInput>> {
    writeln!(writer, "{}", PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    tracing::debug!(bytes = read, "read interactive line");

    Ok(RawInput::from_line(&line))
}

/// Parses a comma-separated list of signed 32-bit integers.
///
/// Whitespace around each piece is ignored. The first piece that is not an
/// integer (including an empty piece) fails the whole list.
///
/// # Example
///
/// ```rust
/// use numpack::input::parse_numbers;
///
/// assert_eq!(parse_numbers("5,-3, 9").unwrap(), vec![5, -3, 9]);
/// assert!(parse_numbers("5,abc,1").is_err());
/// ```
pub fn parse_numbers(token: &str) -> Result<Vec<i32>> {
    token
        .split(NUMBER_SEPARATOR)
        .map(|piece| {
            piece
                .trim()
                .parse::<i32>()
                .map_err(|e| NumpackError::invalid_number(piece, e))
        })
        .collect()
}
