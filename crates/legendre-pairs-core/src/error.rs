//! Error types for correlation screening.
//!
//! Every component returns [`ScreenResult`]. Nothing in this crate terminates
//! the process; the CLI driver maps errors to exit codes via
//! [`ScreenError::exit_code`].
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success (possibly zero matches) |
//! | 1 | Input or output error |
//! | 2 | Usage error (raised by the CLI argument parser) |
//!
//! All errors are fatal for the run. There is no fallback value for a bad
//! integer and no partial collection after a bad line.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for screening operations.
pub type ScreenResult<T> = Result<T, ScreenError>;

/// Comprehensive error type for loading, matching and reporting.
#[derive(Error, Debug)]
pub enum ScreenError {
    // ========== Source Errors ==========
    /// Input source could not be opened or read.
    #[error("Source unreadable: {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line with fewer than two whitespace-separated fields.
    #[error("Malformed line in {source_name} at line {line}: {content:?}")]
    MalformedLine {
        source_name: String,
        line: usize,
        content: String,
    },

    /// A key token that is not a valid integer.
    ///
    /// `line` is 0 and `source_name` empty when raised outside a loader.
    #[error("Malformed integer in {source_name} at line {line}: {token:?}")]
    MalformedInteger {
        source_name: String,
        line: usize,
        token: String,
    },

    /// A sequence that is not a string of exponents `0..=3` of length >= 2.
    #[error("Malformed sequence in {source_name} at line {line}: {content:?}")]
    MalformedSequence {
        source_name: String,
        line: usize,
        content: String,
    },

    // ========== Shape Errors ==========
    /// Vector lengths differ within a source or across the two sources.
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    // ========== Output Errors ==========
    /// Writing the report failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScreenError {
    /// Process exit code for this error.
    #[inline]
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Stable error code string (e.g. `"ERR_MALFORMED_LINE"`).
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SourceUnreadable { .. } => "ERR_SOURCE_UNREADABLE",
            Self::MalformedLine { .. } => "ERR_MALFORMED_LINE",
            Self::MalformedInteger { .. } => "ERR_MALFORMED_INTEGER",
            Self::MalformedSequence { .. } => "ERR_MALFORMED_SEQUENCE",
            Self::DimensionMismatch { .. } => "ERR_DIMENSION_MISMATCH",
            Self::Output(_) => "ERR_OUTPUT",
            Self::Serialization(_) => "ERR_SERIALIZATION",
        }
    }

    /// Attach source name and line number to a parse error.
    ///
    /// Other variants pass through unchanged.
    pub(crate) fn at_line(self, name: &str, line_no: usize) -> Self {
        match self {
            Self::MalformedInteger { token, .. } => Self::MalformedInteger {
                source_name: name.to_string(),
                line: line_no,
                token,
            },
            Self::MalformedSequence { content, .. } => Self::MalformedSequence {
                source_name: name.to_string(),
                line: line_no,
                content,
            },
            Self::DimensionMismatch {
                expected, actual, ..
            } => Self::DimensionMismatch {
                expected,
                actual,
                context: format!("{} at line {}", name, line_no),
            },
            other => other,
        }
    }
}
