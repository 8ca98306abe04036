//! Error types for the Hearth system.
//!
//! Uses `thiserror` for ergonomic error definition. Parse mismatches are not
//! errors (an unmatched command is an ordinary negative outcome); `Error` is
//! reserved for registry inconsistencies and runtime I/O.

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Hearth operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a device-not-found error.
    #[must_use]
    pub fn device_not_found(nickname: impl Into<String>) -> Self {
        Self::new(ErrorKind::DeviceNotFound(nickname.into()))
    }

    /// Creates an editor failure error.
    #[must_use]
    pub fn editor_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EditorFailure(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A dispatched instruction named a device absent from the registry.
    ///
    /// Unreachable when the instruction was parsed against the same
    /// registry's snapshot; reachable when callers mix registries.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// The line editor failed to initialize or read.
    #[error("editor failure: {0}")]
    EditorFailure(String),

    /// An I/O operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
