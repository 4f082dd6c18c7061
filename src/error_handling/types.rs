//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::USAGE_MESSAGE;

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

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending `Config` field
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

impl ConfigValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Failure of a single address resolution.
///
/// The `Display` text of each variant is exactly what ends up in the
/// `{"error": ...}` output object.
#[derive(Error, Debug)]
pub enum LookupError {
    /// No address argument was given.
    #[error("{}", USAGE_MESSAGE)]
    Usage,

    /// The address is malformed or inside a reserved block.
    #[error("{0} is non-routable or reserved")]
    NonRoutable(String),

    /// The remote service answered with a non-success status.
    #[error("{0}")]
    Service(String),

    /// The remote call failed (connect, timeout, body decoding).
    #[error("{0}")]
    Request(#[from] ReqwestError),

    /// The local cache could not be opened, prepared or read.
    #[error("{0}")]
    Storage(#[from] DatabaseError),
}

/// Coarse classification of a [`LookupError`], used for exit code policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    Usage,
    NonRoutable,
    ServiceFailure,
    RequestFailure,
    Storage,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Usage => "Usage error",
            ErrorKind::NonRoutable => "Non-routable address",
            ErrorKind::ServiceFailure => "Lookup service failure",
            ErrorKind::RequestFailure => "Lookup request failure",
            ErrorKind::Storage => "Cache storage failure",
        }
    }

    /// Fatal kinds terminate the process instead of being printed as JSON.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorKind::Storage)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Usage => ErrorKind::Usage,
            LookupError::NonRoutable(_) => ErrorKind::NonRoutable,
            LookupError::Service(_) => ErrorKind::ServiceFailure,
            LookupError::Request(_) => ErrorKind::RequestFailure,
            LookupError::Storage(_) => ErrorKind::Storage,
        }
    }
}
