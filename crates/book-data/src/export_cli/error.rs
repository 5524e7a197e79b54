//! Error types for the bulk export CLI.

use thiserror::Error;

use crate::error::{ExportError, GenerationError};

/// Errors surfaced by the CLI parsing and export flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The output format was not `csv` or `json`.
    #[error("unknown format '{value}'; expected csv or json")]
    UnknownFormat {
        /// Format name that was not recognised.
        value: String,
    },
    /// The options did not describe a valid catalogue window.
    #[error("invalid request: {source}")]
    Generation {
        /// Underlying validation error.
        #[from]
        #[source]
        source: GenerationError,
    },
    /// Writing the export failed.
    #[error("export error: {source}")]
    Export {
        /// Underlying writer error.
        #[from]
        #[source]
        source: ExportError,
    },
}
