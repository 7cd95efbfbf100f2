//! Error types for analysis and scanning.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected options, detected before any computation begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A forced start bound above the forced end bound.
    #[error("Forced start {start} is greater than forced end {end}")]
    ForcedRangeInverted { start: u64, end: u64 },

    /// An increment of zero would never advance the sequence.
    #[error("Increment must be at least 1")]
    ZeroIncrement,

    /// A zero group threshold would split between every pair of values.
    #[error("Group threshold must be at least 1")]
    ZeroThreshold,

    /// A zero modulo boundary has no multiples to extend to.
    #[error("Modulo boundary must be at least 1")]
    ZeroBoundary,

    /// Other invalid configuration.
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// Malformed input from the upstream scanning collaborator.
#[derive(Debug, Error)]
pub enum DataError {
    /// A digit run whose value does not fit in the native integer range.
    /// Surfaced explicitly instead of silently wrapping.
    #[error("Numeric value too large in '{name}': {digits}")]
    NumberTooLarge { name: String, digits: String },
}

/// Top-level analysis error, distinguishing bad options from bad input.
#[derive(Debug, Error)]
pub enum GapError {
    /// The configuration was rejected; no partial report is produced.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The input names could not be interpreted.
    #[error(transparent)]
    Data(#[from] DataError),
}

impl GapError {
    /// Whether this error originated from configuration.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Whether this error originated from input data.
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }
}

/// Errors that can occur while collecting names from disk.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An include or exclude pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Invalid scan configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
