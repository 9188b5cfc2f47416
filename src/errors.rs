/*!
 * Error types for the txt2xliff application.
 *
 * This module contains the custom error types for the conversion core,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while converting a text-file pair to XLIFF
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Error from a file operation: missing, unreadable, not UTF-8, or unwritable
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Source and target files have different line counts.
    ///
    /// This is a user-data error, not a system fault: the input files are
    /// not line-aligned and no output is produced.
    ///
    /// The fields are named `*_lines` rather than plain `source`/`target`
    /// because thiserror treats a field named `source` as the error cause.
    #[error("Line count mismatch: source has {source_lines} lines, target has {target_lines} lines")]
    LengthMismatch {
        /// Number of lines in the source file
        source_lines: usize,
        /// Number of lines in the target file
        target_lines: usize,
    },

    /// Error building or writing the XML document
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl ConvertError {
    /// True for failures caused by the input data rather than the system
    pub fn is_user_data_error(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. })
    }
}
