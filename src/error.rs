//! Error taxonomy for parsing, storage and command execution.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Parsing errors
    MalformedLine,
    MalformedRecord,

    // Command errors
    UnknownCommand,
    InvalidArgument,

    // Internal errors
    IoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MalformedLine => "MALFORMED_LINE",
            ErrorCode::MalformedRecord => "MALFORMED_RECORD",
            ErrorCode::UnknownCommand => "UNKNOWN_COMMAND",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::IoError => "IO_ERROR",
        }
    }
}

/// Errors raised by the tracker library.
#[derive(Debug, Error)]
pub enum Error {
    /// A line could not be split into fields. The tokenizer degrades instead
    /// of failing, so this is only produced by callers that need a non-empty line.
    #[error("malformed line: {line:?}")]
    MalformedLine { line: String },

    #[error("malformed {kind} record: {reason}")]
    MalformedRecord { kind: &'static str, reason: String },

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command}: {reason}")]
    InvalidArgument { command: String, reason: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::MalformedLine { .. } => ErrorCode::MalformedLine,
            Error::MalformedRecord { .. } => ErrorCode::MalformedRecord,
            Error::UnknownCommand(_) => ErrorCode::UnknownCommand,
            Error::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            Error::Io { .. } => ErrorCode::IoError,
        }
    }

    // Convenience constructors

    pub fn malformed(kind: &'static str, reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            kind,
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(command: &str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            command: command.to_string(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let err = Error::malformed("task", "too few fields");
        assert_eq!(err.code(), ErrorCode::MalformedRecord);
        assert_eq!(err.code().as_str(), "MALFORMED_RECORD");
        assert_eq!(err.to_string(), "malformed task record: too few fields");
    }

    #[test]
    fn io_error_mentions_path() {
        let err = Error::io(
            "/tmp/Task.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.code(), ErrorCode::IoError);
        assert!(err.to_string().contains("/tmp/Task.txt"));
    }
}
