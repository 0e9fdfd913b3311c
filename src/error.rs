//! Error types for nbcheck operations.
//!
//! This module defines [`AuditError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Expected absence (a package that does not import, a tool that is not on
//!   PATH, a kernel or extension that is not registered) is never an error.
//!   Checkers turn it into a normal value that the report renders.
//! - `AuditError` covers the faults that end a run: broken configuration, a
//!   missing Python interpreter, or a probe that failed in an unexpected way.
//! - Use `anyhow::Error` (via `AuditError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for nbcheck operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Manifest file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a manifest.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Manifest parsed but describes an audit that cannot run.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The configured Python interpreter could not be located.
    #[error("Python interpreter '{interpreter}' not found on PATH")]
    InterpreterNotFound { interpreter: String },

    /// A probe failed for a reason other than the thing being absent.
    #[error("Probe '{probe}' failed unexpectedly:\n{message}")]
    ProbeFailed { probe: String, message: String },

    /// A probe produced output that does not follow the probe protocol.
    #[error("Probe '{probe}' returned malformed output: {message}")]
    MalformedProbeOutput { probe: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for nbcheck operations.
pub type Result<T> = std::result::Result<T, AuditError>;
