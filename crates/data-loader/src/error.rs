//! Error types for the data-loader crate.
//!
//! Only two things can go wrong while loading: an input cannot be opened or
//! read, or a line does not have the expected shape. Both are fatal for the
//! run. Reviews for unknown movies are not errors at all.

use thiserror::Error;

/// Errors that can occur during data loading and parsing
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Input file could not be opened
    #[error("cannot open file: {path}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error occurred while reading an already opened input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Line in a data file couldn't be parsed
    ///
    /// `line` is the 1-based physical line number, header included.
    #[error("Parse error at line {line} in {file}: {reason}")]
    FormatError {
        file: String,
        line: usize,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
