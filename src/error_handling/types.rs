//! Error type definitions.
//!
//! `ErrorCode` is the fixed taxonomy surfaced as the process exit status. The
//! collaborator errors below each map onto exactly one code.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

impl InitializationError {
    /// Exit code for a setup failure.
    ///
    /// A client that cannot be built cannot build any request, so it exits
    /// as `InvalidRequest`. The logger is optional and has no code of its own.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            InitializationError::LoggerError(_) => None,
            InitializationError::HttpClientError(_) => Some(ErrorCode::InvalidRequest),
        }
    }
}

/// Failure to turn a spec file into a `SpecContainer`.
#[derive(Error, Debug)]
pub enum SpecLoadError {
    /// The file could not be read.
    #[error("File error: {}: {source}", path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid spec document.
    #[error("Unmarshal error: {}: {source}", path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl SpecLoadError {
    /// Exit code reported for this failure.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            SpecLoadError::Read { .. } => ErrorCode::FileError,
            SpecLoadError::Parse { .. } => ErrorCode::UnmarshalError,
        }
    }
}

/// Failure to get response headers for one URL.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be built (bad URL, header name or value).
    #[error("Invalid request: {0}")]
    Build(#[source] ReqwestError),

    /// The request was built but sending it failed.
    #[error("Request failed: {0}")]
    Transport(#[source] ReqwestError),
}

impl ClientError {
    /// Exit code reported for this failure.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ClientError::Build(_) => ErrorCode::InvalidRequest,
            ClientError::Transport(_) => ErrorCode::FailedRequest,
        }
    }
}

/// Kinds of validation failure, in exit code order.
///
/// The discriminant is the process exit status; a run exits with the first
/// code it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[repr(i32)]
pub enum ErrorCode {
    /// Spec file could not be read
    FileError = 1,
    /// Spec file is not valid JSON for a spec container
    UnmarshalError = 2,
    /// Request for a URL could not be built
    InvalidRequest = 3,
    /// Request for a URL could not be sent
    FailedRequest = 4,
    /// Header present/absent or value count differs from expectation
    MissingResponseHeader = 5,
    /// Header value at some position differs from expectation
    FailAssertResponseHeaderValue = 6,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorCode {
    /// Process exit status for this code.
    pub fn exit_code(self) -> i32 {
        self as i32
    }

    /// Human-readable name, used as the prefix of failure messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::FileError => "File error",
            ErrorCode::UnmarshalError => "Unmarshal error",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::FailedRequest => "Failed request",
            ErrorCode::MissingResponseHeader => "Missing response header",
            ErrorCode::FailAssertResponseHeaderValue => "Header assertion failed",
        }
    }
}
