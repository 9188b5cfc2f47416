use std::fs;
use std::path::Path;

use crate::errors::ConvertError;

// @module: Line-oriented text file loading

/// Read a text file into an ordered sequence of trimmed lines.
///
/// The file is decoded as UTF-8; a missing file or invalid UTF-8 surfaces
/// as `ConvertError::Io`. Each line has its surrounding whitespace removed,
/// including the trailing newline. Blank lines are preserved as empty
/// strings so that line numbering stays aligned with the sibling file.
/// An empty file yields an empty sequence.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ConvertError> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(content
        .lines()
        .map(|line| line.trim().to_string())
        .collect())
}
