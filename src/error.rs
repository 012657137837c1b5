//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use std::path::PathBuf;

use thiserror::Error;

use crate::constants::exit;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Process exit code reported for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Io { .. } => exit::IO_ERROR,
            Self::Config { .. } => exit::CONFIG_ERROR,
            Self::Msg(_) => exit::FAILURE,
        }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn io_errors_keep_path_and_exit_code() {
        let err = Error::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            PathBuf::from("script.tex"),
        );
        assert_eq!(err.exit_code(), 74);
        assert!(err.to_string().contains("script.tex"));
    }

    #[test]
    fn config_errors_include_hint() {
        let err = Error::config("bad rules file", "Check STAGEFMT_RULES");
        match &err {
            Error::Config { hint, .. } => assert!(hint.contains("STAGEFMT_RULES")),
            _ => panic!("Expected Config error"),
        }
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn message_errors_fall_back_to_generic_code() {
        assert_eq!(Error::from("boom").exit_code(), 1);
    }
}
