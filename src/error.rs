//! Error types for mining runs

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mining operations
pub type Result<T> = std::result::Result<T, AprioriError>;

/// Every way a run can fail. None of them are retried.
#[derive(Error, Debug)]
pub enum AprioriError {
    /// Missing, surplus or unrecognized command-line arguments
    #[error("invalid arguments: {message}")]
    InvalidArgumentCount { message: String },

    /// Minimum support that is not a number or not within 0..=100
    #[error("invalid minimum support {value:?}: {reason}")]
    InvalidSupportValue {
        value: String,
        reason: SupportValueIssue,
    },

    #[error("cannot open input file {}: {source}", .path.display())]
    InputFileUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create output file {}: {source}", .path.display())]
    OutputFileUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A token on a transaction line that is not an integer (1-based line)
    #[error("malformed transaction on line {line}: {token:?} is not an integer")]
    MalformedTransactionLine { line: usize, token: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportValueIssue {
    NotANumber,
    OutOfRange,
}

impl fmt::Display for SupportValueIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportValueIssue::NotANumber => f.write_str("not a number"),
            SupportValueIssue::OutOfRange => f.write_str("not within 0 ~ 100%"),
        }
    }
}

impl AprioriError {
    /// Two-line report: the class of error, then the argument or line at fault.
    pub fn diagnostic(&self) -> (String, String) {
        match self {
            AprioriError::InvalidArgumentCount { message } => (
                "Error : Arguments".to_string(),
                format!("{} -> Wrong arguments", message),
            ),
            AprioriError::InvalidSupportValue { value, reason } => {
                let cause = match reason {
                    SupportValueIssue::NotANumber => "Not number",
                    SupportValueIssue::OutOfRange => "Not 0 ~ 100%",
                };
                (
                    "Error : Minimum support".to_string(),
                    format!("{} -> {}", value, cause),
                )
            }
            AprioriError::InputFileUnavailable { path, source } => (
                "Error : Input file name".to_string(),
                format!("{} -> {}", path.display(), source),
            ),
            AprioriError::OutputFileUnavailable { path, source } => (
                "Error : Output file name".to_string(),
                format!("{} -> {}", path.display(), source),
            ),
            AprioriError::MalformedTransactionLine { line, token } => (
                "Error : Input file content".to_string(),
                format!("line {}: {:?} -> Not integer", line, token),
            ),
            AprioriError::Io(err) => ("Error : I/O".to_string(), err.to_string()),
        }
    }

    /// Process exit status: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            AprioriError::InvalidArgumentCount { .. } => 2,
            _ => 1,
        }
    }
}
